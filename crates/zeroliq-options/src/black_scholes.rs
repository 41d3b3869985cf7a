//! Black-Scholes valuation of European options.
//!
//! # Formula
//!
//! ```text
//! C = S·Φ(d1) − K·e^(−rT)·Φ(d2)
//! d1 = [ln(S/K) + (r + σ²/2)·T] / (σ·√T)
//! d2 = d1 − σ·√T
//! ```
//!
//! Boundary cases are handled before the formula is touched:
//!
//! | Condition | Call value |
//! |-----------|------------|
//! | `T ≤ 0` | `max(0, S − K)` |
//! | `K ≤ 0` | `S` |
//! | `σ = 0`, `T > 0` | `max(0, S − K·e^(−rT))` or [`OptionError::DegenerateMarket`], per [`DegenerateVolatility`] |

use serde::{Deserialize, Serialize};

use zeroliq_math::distributions::norm_cdf;

use crate::error::{require_finite, require_non_negative, OptionError, OptionResult};
use crate::market::MarketParameters;

/// How to price when volatility is zero but time remains.
///
/// The standard `d1` divides by `σ·√T`, so a zero volatility needs an explicit
/// rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateVolatility {
    /// Use the deterministic limit `max(0, S − K·e^(−rT))`.
    #[default]
    DiscountedIntrinsic,
    /// Fail with [`OptionError::DegenerateMarket`] unless `K = S`.
    Reject,
}

/// Black-Scholes pricer.
///
/// Stateless apart from its zero-volatility policy; `Copy` and freely shared
/// across threads.
///
/// # Example
///
/// ```rust
/// use zeroliq_options::BlackScholes;
///
/// let bs = BlackScholes::new();
/// let value = bs.price_call(1500.0, 702.0, 1.0, 30.0 / 365.0, 0.02).unwrap();
/// assert!((value - 799.51).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackScholes {
    degenerate_volatility: DegenerateVolatility,
}

/// Checked pricing inputs.
struct Inputs {
    spot: f64,
    strike: f64,
    volatility: f64,
    tenor_years: f64,
    rate: f64,
}

impl Inputs {
    fn validate(
        spot: f64,
        strike: f64,
        volatility: f64,
        tenor_years: f64,
        rate: f64,
    ) -> OptionResult<Self> {
        Ok(Self {
            spot: require_non_negative("spot", spot)?,
            strike: require_non_negative("strike", strike)?,
            volatility: require_non_negative("volatility", volatility)?,
            tenor_years: require_non_negative("tenor_years", tenor_years)?,
            rate: require_finite("risk_free_rate", rate)?,
        })
    }

    fn discount_factor(&self) -> f64 {
        (-self.rate * self.tenor_years).exp()
    }

    // Each term is divided through by σ√T so no σ² appears; extreme
    // volatilities stay finite and the price tends to spot.
    fn d1_d2(&self) -> (f64, f64) {
        let sqrt_t = self.tenor_years.sqrt();
        let sigma_sqrt_t = self.volatility * sqrt_t;
        let moneyness = (self.spot / self.strike).ln() / sigma_sqrt_t;
        let drift = self.rate / self.volatility * sqrt_t;
        let half_spread = 0.5 * sigma_sqrt_t;
        (
            moneyness + drift + half_spread,
            moneyness + drift - half_spread,
        )
    }
}

impl BlackScholes {
    /// Creates a pricer with the default zero-volatility policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the zero-volatility policy.
    #[must_use]
    pub fn with_degenerate_volatility(mut self, policy: DegenerateVolatility) -> Self {
        self.degenerate_volatility = policy;
        self
    }

    /// Returns the zero-volatility policy.
    pub fn degenerate_volatility(&self) -> DegenerateVolatility {
        self.degenerate_volatility
    }

    /// Prices a European call.
    ///
    /// # Arguments
    ///
    /// * `spot` - Underlying price, `≥ 0`
    /// * `strike` - Strike price, `≥ 0`
    /// * `volatility` - Annualized volatility, `≥ 0`
    /// * `tenor_years` - Time to expiry in years, `≥ 0`
    /// * `risk_free_rate` - Continuously-compounded rate (any finite value)
    ///
    /// # Errors
    ///
    /// [`OptionError::InvalidInput`] for a negative or non-finite input;
    /// [`OptionError::DegenerateMarket`] for zero volatility under
    /// [`DegenerateVolatility::Reject`].
    pub fn price_call(
        &self,
        spot: f64,
        strike: f64,
        volatility: f64,
        tenor_years: f64,
        risk_free_rate: f64,
    ) -> OptionResult<f64> {
        let inputs = Inputs::validate(spot, strike, volatility, tenor_years, risk_free_rate)?;
        self.call_value(&inputs)
    }

    /// Prices a European call against a [`MarketParameters`] snapshot.
    pub fn price_call_in(&self, market: &MarketParameters, strike: f64) -> OptionResult<f64> {
        self.price_call(
            market.spot_price,
            strike,
            market.volatility,
            market.tenor_years,
            market.risk_free_rate,
        )
    }

    /// Prices a European put by put-call parity.
    ///
    /// Boundary cases mirror the call: `T ≤ 0` gives `max(0, K − S)` and
    /// `K ≤ 0` gives zero.
    pub fn price_put(
        &self,
        spot: f64,
        strike: f64,
        volatility: f64,
        tenor_years: f64,
        risk_free_rate: f64,
    ) -> OptionResult<f64> {
        let inputs = Inputs::validate(spot, strike, volatility, tenor_years, risk_free_rate)?;
        if inputs.tenor_years <= 0.0 {
            return Ok((inputs.strike - inputs.spot).max(0.0));
        }
        if inputs.strike <= 0.0 {
            return Ok(0.0);
        }

        let call = self.call_value(&inputs)?;
        Ok((call - inputs.spot + inputs.strike * inputs.discount_factor()).max(0.0))
    }

    /// Sensitivity of the call value to its strike, `∂C/∂K = −e^(−rT)·Φ(d2)`.
    ///
    /// Always in `[−1, 0]` for a non-negative rate. At expiry this is the slope
    /// of the payoff (`−1` in the money, `0` otherwise); with zero volatility it
    /// is the slope of the discounted payoff.
    pub fn call_strike_sensitivity(
        &self,
        spot: f64,
        strike: f64,
        volatility: f64,
        tenor_years: f64,
        risk_free_rate: f64,
    ) -> OptionResult<f64> {
        let inputs = Inputs::validate(spot, strike, volatility, tenor_years, risk_free_rate)?;

        if inputs.tenor_years <= 0.0 {
            return Ok(if inputs.strike < inputs.spot { -1.0 } else { 0.0 });
        }

        let discount = inputs.discount_factor();
        if inputs.strike <= 0.0 {
            return Ok(-discount);
        }
        if inputs.volatility == 0.0 {
            self.check_degenerate(&inputs)?;
            return Ok(if inputs.strike * discount < inputs.spot {
                -discount
            } else {
                0.0
            });
        }

        let (_, d2) = inputs.d1_d2();
        Ok(-discount * norm_cdf(d2))
    }

    fn call_value(&self, inputs: &Inputs) -> OptionResult<f64> {
        if inputs.tenor_years <= 0.0 {
            return Ok((inputs.spot - inputs.strike).max(0.0));
        }
        if inputs.strike <= 0.0 {
            return Ok(inputs.spot);
        }

        let discount = inputs.discount_factor();
        if inputs.volatility == 0.0 {
            self.check_degenerate(inputs)?;
            return Ok((inputs.spot - inputs.strike * discount).max(0.0));
        }

        let (d1, d2) = inputs.d1_d2();
        let value = inputs.spot * norm_cdf(d1) - inputs.strike * discount * norm_cdf(d2);

        // Cancellation can leave a tiny negative far out of the money
        Ok(value.max(0.0))
    }

    fn check_degenerate(&self, inputs: &Inputs) -> OptionResult<()> {
        if self.degenerate_volatility == DegenerateVolatility::Reject
            && inputs.strike != inputs.spot
        {
            return Err(OptionError::DegenerateMarket {
                spot: inputs.spot,
                strike: inputs.strike,
                tenor_years: inputs.tenor_years,
            });
        }
        Ok(())
    }
}

/// Prices a European call with the default zero-volatility policy.
///
/// Shorthand for [`BlackScholes::price_call`] on a default pricer.
///
/// # Example
///
/// ```rust
/// use zeroliq_options::price_call;
///
/// // At expiry only intrinsic value remains
/// assert_eq!(price_call(1500.0, 1000.0, 1.0, 0.0, 0.02).unwrap(), 500.0);
/// // A zero strike is certain to be exercised
/// assert_eq!(price_call(1500.0, 0.0, 1.0, 0.5, 0.02).unwrap(), 1500.0);
/// ```
pub fn price_call(
    spot: f64,
    strike: f64,
    volatility: f64,
    tenor_years: f64,
    risk_free_rate: f64,
) -> OptionResult<f64> {
    BlackScholes::default().price_call(spot, strike, volatility, tenor_years, risk_free_rate)
}
