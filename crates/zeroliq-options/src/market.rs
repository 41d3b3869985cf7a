//! Market state used for option valuation.

use serde::{Deserialize, Serialize};

use crate::error::{require_finite, require_non_negative, require_positive, OptionResult};

/// Days per year used by [`MarketParameters::tenor_from_days`].
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Market state at a point in time.
///
/// Construct with [`MarketParameters::new`] to have the inputs checked. A value
/// built any other way (struct literal, deserialization) is checked again by
/// every pricing call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketParameters {
    /// Current price of the collateral asset, `S > 0`.
    pub spot_price: f64,
    /// Annualized volatility, `σ ≥ 0`.
    pub volatility: f64,
    /// Annualized continuously-compounded risk-free rate.
    pub risk_free_rate: f64,
    /// Time to expiry in years, `T ≥ 0`.
    pub tenor_years: f64,
}

impl MarketParameters {
    /// Creates validated market parameters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zeroliq_options::MarketParameters;
    ///
    /// let market = MarketParameters::new(1500.0, 1.0, 0.02, 30.0 / 365.0).unwrap();
    /// assert_eq!(market.spot_price, 1500.0);
    /// ```
    pub fn new(
        spot_price: f64,
        volatility: f64,
        risk_free_rate: f64,
        tenor_years: f64,
    ) -> OptionResult<Self> {
        let market = Self {
            spot_price,
            volatility,
            risk_free_rate,
            tenor_years,
        };
        market.validate()?;
        Ok(market)
    }

    /// Converts a tenor in days to years on an ACT/365 basis.
    pub fn tenor_from_days(days: f64) -> f64 {
        days / DAYS_PER_YEAR
    }

    /// Checks the invariants on every field.
    pub fn validate(&self) -> OptionResult<()> {
        require_positive("spot_price", self.spot_price)?;
        require_non_negative("volatility", self.volatility)?;
        require_finite("risk_free_rate", self.risk_free_rate)?;
        require_non_negative("tenor_years", self.tenor_years)?;
        Ok(())
    }

    /// Discount factor `e^(−rT)` to expiry.
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.tenor_years).exp()
    }

    /// Returns a copy with a different volatility.
    #[must_use]
    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }
}
