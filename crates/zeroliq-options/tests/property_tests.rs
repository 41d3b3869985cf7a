//! Property-based tests for the call pricer.
//!
//! These tests verify invariants that must hold for any valid market:
//! - No-arbitrage bounds
//! - Exact boundary values at expiry and at zero strike
//! - Monotonicity in strike, volatility, and tenor
//! - Determinism

use proptest::prelude::*;
use zeroliq_options::{price_call, BlackScholes};

// =============================================================================
// BOUNDS
// =============================================================================

proptest! {
    /// max(0, S − K·e^(−rT)) ≤ C ≤ S.
    #[test]
    fn call_within_no_arbitrage_bounds(
        spot in 1.0_f64..5000.0,
        strike in 0.5_f64..10_000.0,
        vol in 0.01_f64..3.0,
        tenor in 0.01_f64..5.0,
        rate in -0.05_f64..0.20,
    ) {
        let value = price_call(spot, strike, vol, tenor, rate).unwrap();
        let lower = (spot - strike * (-rate * tenor).exp()).max(0.0);
        let slack = 1e-9 * spot;

        prop_assert!(value >= lower - slack, "value {} below lower bound {}", value, lower);
        prop_assert!(value <= spot + slack, "value {} above spot {}", value, spot);
    }

    /// At expiry only intrinsic value remains, exactly.
    #[test]
    fn expiry_is_exact_intrinsic(
        spot in 0.0_f64..5000.0,
        strike in 0.0_f64..5000.0,
        vol in 0.0_f64..3.0,
        rate in -0.05_f64..0.20,
    ) {
        let value = price_call(spot, strike, vol, 0.0, rate).unwrap();
        prop_assert_eq!(value, (spot - strike).max(0.0));
    }

    /// A zero strike is worth the spot, exactly.
    #[test]
    fn zero_strike_is_exact_spot(
        spot in 0.0_f64..5000.0,
        vol in 0.0_f64..3.0,
        tenor in 0.001_f64..5.0,
        rate in -0.05_f64..0.20,
    ) {
        prop_assert_eq!(price_call(spot, 0.0, vol, tenor, rate).unwrap(), spot);
    }
}

// =============================================================================
// MONOTONICITY
// =============================================================================

proptest! {
    /// Raising the strike strictly lowers the call value.
    #[test]
    fn strictly_decreasing_in_strike(
        spot in 10.0_f64..5000.0,
        moneyness in 0.5_f64..1.5,
        bump in 0.01_f64..0.10,
        vol in 0.3_f64..2.0,
        tenor in 0.1_f64..2.0,
        rate in 0.0_f64..0.10,
    ) {
        let k1 = spot * moneyness;
        let k2 = k1 + spot * bump;

        let c1 = price_call(spot, k1, vol, tenor, rate).unwrap();
        let c2 = price_call(spot, k2, vol, tenor, rate).unwrap();

        prop_assert!(c1 > c2, "C({}) = {} not above C({}) = {}", k1, c1, k2, c2);
    }

    /// Raising volatility never lowers the call value.
    #[test]
    fn non_decreasing_in_volatility(
        spot in 10.0_f64..5000.0,
        moneyness in 0.2_f64..3.0,
        vol in 0.0_f64..2.0,
        bump in 0.0_f64..1.0,
        tenor in 0.01_f64..2.0,
        rate in 0.0_f64..0.10,
    ) {
        let strike = spot * moneyness;
        let c1 = price_call(spot, strike, vol, tenor, rate).unwrap();
        let c2 = price_call(spot, strike, vol + bump, tenor, rate).unwrap();

        prop_assert!(c2 >= c1 - 1e-9 * spot);
    }

    /// Lengthening the tenor never lowers the call value.
    #[test]
    fn non_decreasing_in_tenor(
        spot in 10.0_f64..5000.0,
        moneyness in 0.2_f64..3.0,
        vol in 0.01_f64..2.0,
        tenor in 0.0_f64..2.0,
        bump in 0.0_f64..2.0,
        rate in 0.0_f64..0.10,
    ) {
        let strike = spot * moneyness;
        let c1 = price_call(spot, strike, vol, tenor, rate).unwrap();
        let c2 = price_call(spot, strike, vol, tenor + bump, rate).unwrap();

        prop_assert!(c2 >= c1 - 1e-9 * spot);
    }
}

// =============================================================================
// DETERMINISM
// =============================================================================

proptest! {
    /// Identical inputs give bit-identical outputs.
    #[test]
    fn pricing_is_deterministic(
        spot in 1.0_f64..5000.0,
        strike in 0.0_f64..10_000.0,
        vol in 0.0_f64..3.0,
        tenor in 0.0_f64..5.0,
        rate in -0.05_f64..0.20,
    ) {
        let bs = BlackScholes::new();
        let first = bs.price_call(spot, strike, vol, tenor, rate).unwrap();
        let second = bs.price_call(spot, strike, vol, tenor, rate).unwrap();
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }
}
