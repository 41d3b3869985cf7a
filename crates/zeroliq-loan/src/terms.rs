//! Requested loan terms.

use serde::{Deserialize, Serialize};

use crate::error::{LoanError, LoanResult};

/// A requested borrow against collateral.
///
/// Amounts are in two units: `collateral_amount` in units of the collateral
/// token, `loan_amount_out` in units of the borrowed (quote) asset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Collateral posted, `> 0`.
    pub collateral_amount: f64,
    /// Loan cash paid out, `≥ 0`.
    pub loan_amount_out: f64,
    /// Fee charged on the option leg, in `[0, 1)`.
    pub fee_rate: f64,
}

impl LoanTerms {
    /// Creates validated loan terms.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zeroliq_loan::LoanTerms;
    ///
    /// let terms = LoanTerms::new(1.0, 700.0, 0.0).unwrap();
    /// assert_eq!(terms.loan_to_value(1500.0), 700.0 / 1500.0);
    ///
    /// assert!(LoanTerms::new(1.0, 700.0, 1.0).is_err());
    /// ```
    pub fn new(collateral_amount: f64, loan_amount_out: f64, fee_rate: f64) -> LoanResult<Self> {
        let terms = Self {
            collateral_amount,
            loan_amount_out,
            fee_rate,
        };
        terms.validate()?;
        Ok(terms)
    }

    /// Checks the invariants on every field.
    pub fn validate(&self) -> LoanResult<()> {
        if !self.collateral_amount.is_finite() || self.collateral_amount <= 0.0 {
            return Err(LoanError::invalid_input(format!(
                "collateral_amount must be positive and finite, got {}",
                self.collateral_amount
            )));
        }
        if !self.loan_amount_out.is_finite() || self.loan_amount_out < 0.0 {
            return Err(LoanError::invalid_input(format!(
                "loan_amount_out must be non-negative and finite, got {}",
                self.loan_amount_out
            )));
        }
        if !(0.0..1.0).contains(&self.fee_rate) {
            return Err(LoanError::invalid_input(format!(
                "fee_rate must be in [0, 1), got {}",
                self.fee_rate
            )));
        }
        Ok(())
    }

    /// Collateral value in quote units at `spot`.
    pub fn collateral_value(&self, spot: f64) -> f64 {
        self.collateral_amount * spot
    }

    /// Loan-to-value ratio at `spot`.
    pub fn loan_to_value(&self, spot: f64) -> f64 {
        self.loan_amount_out / self.collateral_value(spot)
    }

    /// Whether some strike can balance the swap at `spot`.
    ///
    /// The embedded call is worth between zero and spot, so the fee-adjusted
    /// option leg ranges over `(0, c·S·(1 − f)]`. The swap can only balance
    /// when `c·S·f ≤ L < c·S`: a loan at or above the collateral value is
    /// never balanced, and a loan below the fee leaves the option leg short
    /// even at a zero strike.
    pub fn is_solvable_at(&self, spot: f64) -> bool {
        let collateral_value = self.collateral_value(spot);
        self.loan_amount_out < collateral_value
            && self.loan_amount_out >= collateral_value * self.fee_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(LoanTerms::new(1.0, 0.0, 0.0).is_ok());
        assert!(LoanTerms::new(0.0, 700.0, 0.0).is_err());
        assert!(LoanTerms::new(-1.0, 700.0, 0.0).is_err());
        assert!(LoanTerms::new(1.0, -1.0, 0.0).is_err());
        assert!(LoanTerms::new(1.0, 700.0, -0.01).is_err());
        assert!(LoanTerms::new(1.0, 700.0, f64::NAN).is_err());
        assert!(LoanTerms::new(f64::INFINITY, 700.0, 0.0).is_err());
    }

    #[test]
    fn test_collateral_value_and_ltv() {
        let terms = LoanTerms::new(2.0, 1500.0, 0.01).unwrap();
        assert_eq!(terms.collateral_value(1500.0), 3000.0);
        assert_eq!(terms.loan_to_value(1500.0), 0.5);
    }

    #[test]
    fn test_solvability() {
        let terms = LoanTerms::new(1.0, 1500.0, 0.0).unwrap();
        assert!(!terms.is_solvable_at(1500.0));
        assert!(terms.is_solvable_at(1500.01));
    }

    #[test]
    fn test_fee_sets_lower_solvable_loan() {
        assert!(!LoanTerms::new(1.0, 100.0, 0.5).unwrap().is_solvable_at(1500.0));
        assert!(LoanTerms::new(1.0, 750.0, 0.5).unwrap().is_solvable_at(1500.0));
        assert!(LoanTerms::new(1.0, 0.0, 0.0).unwrap().is_solvable_at(1500.0));
    }
}
