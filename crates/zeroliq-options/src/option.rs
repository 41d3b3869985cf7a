//! The call option embedded in a zero-liquidation loan.

use serde::{Deserialize, Serialize};

use crate::black_scholes::BlackScholes;
use crate::error::{require_non_negative, OptionResult};
use crate::market::MarketParameters;

/// A European call, identified only by its strike.
///
/// Expiry, volatility, and rates come from the [`MarketParameters`] it is
/// priced against, so one value can be revalued across market snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CallOption {
    /// Strike price, `K ≥ 0`. Also the repayment that reclaims the collateral.
    pub strike_price: f64,
}

impl CallOption {
    /// Creates a call with a validated strike.
    pub fn new(strike_price: f64) -> OptionResult<Self> {
        require_non_negative("strike_price", strike_price)?;
        Ok(Self { strike_price })
    }

    /// Values the call with the default Black-Scholes pricer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zeroliq_options::{CallOption, MarketParameters};
    ///
    /// let market = MarketParameters::new(1500.0, 1.0, 0.02, 30.0 / 365.0).unwrap();
    /// let value = CallOption::new(702.0).unwrap().price(&market).unwrap();
    /// assert!((value - 799.51).abs() < 0.01);
    /// ```
    pub fn price(&self, market: &MarketParameters) -> OptionResult<f64> {
        self.price_with(&BlackScholes::default(), market)
    }

    /// Values the call with a specific pricer.
    pub fn price_with(&self, model: &BlackScholes, market: &MarketParameters) -> OptionResult<f64> {
        market.validate()?;
        model.price_call_in(market, self.strike_price)
    }

    /// Payoff if exercised immediately, `max(0, S − K)`.
    pub fn intrinsic_value(&self, spot: f64) -> f64 {
        (spot - self.strike_price).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::black_scholes::DegenerateVolatility;
    use crate::error::OptionError;

    #[test]
    fn test_new_rejects_negative_strike() {
        assert!(CallOption::new(-1.0).is_err());
        assert!(CallOption::new(0.0).is_ok());
    }

    #[test]
    fn test_price_exceeds_intrinsic() {
        let market = MarketParameters::new(1500.0, 1.0, 0.02, 0.25).unwrap();
        let option = CallOption::new(1000.0).unwrap();

        assert!(option.price(&market).unwrap() > option.intrinsic_value(1500.0));
    }

    #[test]
    fn test_price_with_reject_policy() {
        let market = MarketParameters::new(1500.0, 0.0, 0.02, 0.25).unwrap();
        let option = CallOption::new(1000.0).unwrap();
        let bs = BlackScholes::new().with_degenerate_volatility(DegenerateVolatility::Reject);

        assert!(matches!(
            option.price_with(&bs, &market),
            Err(OptionError::DegenerateMarket { .. })
        ));
        assert!(option.price(&market).is_ok());
    }

    #[test]
    fn test_unvalidated_market_is_checked() {
        let market = MarketParameters {
            spot_price: -5.0,
            volatility: 0.5,
            risk_free_rate: 0.0,
            tenor_years: 1.0,
        };
        let option = CallOption::new(10.0).unwrap();

        assert!(option.price(&market).is_err());
    }
}
