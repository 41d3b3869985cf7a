//! Error types for loan structuring.

use thiserror::Error;

use zeroliq_math::MathError;
use zeroliq_options::OptionError;

/// Result type for loan structuring operations.
pub type LoanResult<T> = Result<T, LoanError>;

/// Errors that can occur while solving for a fair strike.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoanError {
    /// A loan or market input violates its precondition.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Zero volatility with time remaining, under a pricer that rejects it.
    #[error("degenerate market: zero volatility with tenor {tenor_years} (spot {spot}, strike {strike})")]
    DegenerateMarket {
        /// Spot price.
        spot: f64,
        /// Strike at which pricing was attempted.
        strike: f64,
        /// Time to expiry in years.
        tenor_years: f64,
    },

    /// No strike makes the swap fair: the loan is at least the collateral
    /// value, or below the fee charged on it.
    #[error(
        "unsolvable: no strike balances loan {loan_amount_out} against collateral value {collateral_value} at fee rate {fee_rate}"
    )]
    Unsolvable {
        /// Requested loan payout.
        loan_amount_out: f64,
        /// Collateral amount times spot.
        collateral_value: f64,
        /// Fee charged on the option leg.
        fee_rate: f64,
    },

    /// A result that did not meet tolerance was required to converge.
    #[error(
        "solver did not converge after {iterations} iterations (strike {strike_price}, objective {objective:.2e})"
    )]
    NonConvergent {
        /// Best strike found.
        strike_price: f64,
        /// Squared objective at that strike.
        objective: f64,
        /// Iterations used.
        iterations: u32,
    },

    /// Solver configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Numerical routine failed for a reason other than the iteration budget.
    #[error("numerical error: {0}")]
    Numerical(String),
}

impl LoanError {
    /// Creates a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Creates a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<OptionError> for LoanError {
    fn from(err: OptionError) -> Self {
        match err {
            OptionError::DegenerateMarket {
                spot,
                strike,
                tenor_years,
            } => LoanError::DegenerateMarket {
                spot,
                strike,
                tenor_years,
            },
            other @ OptionError::InvalidInput { .. } => LoanError::InvalidInput(other.to_string()),
        }
    }
}

impl From<MathError> for LoanError {
    fn from(err: MathError) -> Self {
        LoanError::Numerical(err.to_string())
    }
}

/// A single configuration validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Validation error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Trait for validatable configurations.
pub trait Validate {
    /// Returns every validation failure, or an empty vector if valid.
    fn validate(&self) -> Vec<ValidationError>;

    /// Returns true if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validates and folds all failures into a single [`LoanError::Config`].
    fn validate_or_error(&self) -> LoanResult<()> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(());
        }
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(LoanError::Config(joined))
    }
}
