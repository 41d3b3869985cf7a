//! Solver output and the implied borrowing rate.

use serde::{Deserialize, Serialize};

use crate::config::SolveMethod;
use crate::error::{LoanError, LoanResult};

/// Simple annualized rate implied by repaying `strike_price` for `loan_amount_out`.
///
/// ```text
/// rate = (K / L − 1) / T
/// ```
///
/// Returns `None` when the rate is not defined: a zero loan, a zero tenor, or
/// a non-finite input.
///
/// # Example
///
/// ```rust
/// use zeroliq_loan::implied_annual_rate;
///
/// let rate = implied_annual_rate(1015.52, 1000.0, 30.0 / 365.0).unwrap();
/// assert!((rate - 0.1889).abs() < 0.002);
///
/// assert!(implied_annual_rate(702.0, 700.0, 0.0).is_none());
/// ```
pub fn implied_annual_rate(strike_price: f64, loan_amount_out: f64, tenor_years: f64) -> Option<f64> {
    if !(strike_price.is_finite() && loan_amount_out.is_finite() && tenor_years.is_finite()) {
        return None;
    }
    if loan_amount_out <= 0.0 || tenor_years <= 0.0 {
        return None;
    }
    Some((strike_price / loan_amount_out - 1.0) / tenor_years)
}

/// Outcome of a fair-strike solve.
///
/// A non-converged result is still returned so the caller can decide whether
/// an approximate strike is acceptable; [`FairStrikeResult::require_converged`]
/// turns it into an error instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FairStrikeResult {
    /// Fair strike, never below the configured floor.
    pub strike_price: f64,
    /// Annualized rate implied by the strike; `None` for a zero loan or tenor.
    pub implied_annual_rate: Option<f64>,
    /// Whether the solver met its tolerance.
    pub converged: bool,
    /// Squared balance at `strike_price`.
    pub objective: f64,
    /// Iterations used by the root finder or minimizer.
    pub iterations: u32,
    /// Algorithm that produced the strike.
    pub method: SolveMethod,
}

impl FairStrikeResult {
    /// Returns the result if it converged, otherwise [`LoanError::NonConvergent`].
    pub fn require_converged(self) -> LoanResult<Self> {
        if self.converged {
            Ok(self)
        } else {
            Err(LoanError::NonConvergent {
                strike_price: self.strike_price,
                objective: self.objective,
                iterations: self.iterations,
            })
        }
    }

    /// Repayment premium over the loan, `K − L`.
    pub fn repayment_premium(&self, loan_amount_out: f64) -> f64 {
        self.strike_price - loan_amount_out
    }
}
