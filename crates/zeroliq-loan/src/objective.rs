//! The fair-swap balance between collateral, loan cash, and the embedded call.
//!
//! The borrower hands over `c` units of collateral worth `c·S` and receives
//! `L` in cash plus `c` calls struck at `K`, with a fee `f` taken off the
//! option leg. The swap is fair when both sides are worth the same:
//!
//! ```text
//! g(K) = C(K)·c·(1 − f) + L − c·S = 0
//! ```
//!
//! `g` is strictly decreasing in `K` wherever the call has time value, so it
//! has at most one root. The squared form `g(K)²` is the objective.

use zeroliq_options::{BlackScholes, MarketParameters};

use crate::error::LoanResult;
use crate::terms::LoanTerms;

/// Loan terms and market state bound together for evaluating the balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FairSwap {
    terms: LoanTerms,
    market: MarketParameters,
    model: BlackScholes,
}

impl FairSwap {
    /// Binds validated terms and market state to a pricer.
    pub fn new(
        terms: LoanTerms,
        market: MarketParameters,
        model: BlackScholes,
    ) -> LoanResult<Self> {
        terms.validate()?;
        market.validate()?;
        Ok(Self {
            terms,
            market,
            model,
        })
    }

    /// Loan terms.
    pub fn terms(&self) -> &LoanTerms {
        &self.terms
    }

    /// Market state.
    pub fn market(&self) -> &MarketParameters {
        &self.market
    }

    /// Collateral units net of the option fee, `c·(1 − f)`.
    fn option_notional(&self) -> f64 {
        self.terms.collateral_amount * (1.0 - self.terms.fee_rate)
    }

    /// Per-unit call value at which the swap balances, `(c·S − L) / (c·(1 − f))`.
    pub fn target_option_value(&self) -> f64 {
        (self.terms.collateral_value(self.market.spot_price) - self.terms.loan_amount_out)
            / self.option_notional()
    }

    /// Signed balance `g(K)`; positive when the borrower is overpaid.
    pub fn residual(&self, strike: f64) -> LoanResult<f64> {
        let call = self.model.price_call_in(&self.market, strike)?;
        Ok(call * self.option_notional() + self.terms.loan_amount_out
            - self.terms.collateral_value(self.market.spot_price))
    }

    /// Squared balance `g(K)²`.
    pub fn objective(&self, strike: f64) -> LoanResult<f64> {
        self.residual(strike).map(|g| g * g)
    }

    /// Slope `g'(K) = c·(1 − f)·∂C/∂K`.
    pub fn residual_slope(&self, strike: f64) -> LoanResult<f64> {
        let m = &self.market;
        let sensitivity = self.model.call_strike_sensitivity(
            m.spot_price,
            strike,
            m.volatility,
            m.tenor_years,
            m.risk_free_rate,
        )?;
        Ok(sensitivity * self.option_notional())
    }
}

/// Squared fair-swap objective at `strike` for raw inputs.
///
/// Useful for checking a strike produced elsewhere.
///
/// # Example
///
/// ```rust
/// use zeroliq_loan::fair_swap_objective;
///
/// let t = 30.0 / 365.0;
/// let near = fair_swap_objective(701.5, 1.0, 0.0, 700.0, 1500.0, 1.0, t, 0.02).unwrap();
/// let far = fair_swap_objective(750.0, 1.0, 0.0, 700.0, 1500.0, 1.0, t, 0.02).unwrap();
/// assert!(near < far);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn fair_swap_objective(
    strike: f64,
    collateral_amount: f64,
    fee_rate: f64,
    loan_amount_out: f64,
    spot: f64,
    volatility: f64,
    tenor_years: f64,
    risk_free_rate: f64,
) -> LoanResult<f64> {
    let swap = FairSwap::new(
        LoanTerms::new(collateral_amount, loan_amount_out, fee_rate)?,
        MarketParameters::new(spot, volatility, risk_free_rate, tenor_years)?,
        BlackScholes::default(),
    )?;
    swap.objective(strike)
}
