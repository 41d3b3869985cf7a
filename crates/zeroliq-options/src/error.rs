//! Error types for option pricing.

use thiserror::Error;

/// Result type for option pricing operations.
pub type OptionResult<T> = Result<T, OptionError>;

/// Errors that can occur while pricing an option.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionError {
    /// A pricing input violates its domain (negative, NaN, or infinite).
    #[error("invalid input: {name} = {value} ({reason})")]
    InvalidInput {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// Constraint that was violated.
        reason: &'static str,
    },

    /// Zero volatility with time remaining, under a policy that rejects it.
    #[error(
        "degenerate market: zero volatility with tenor {tenor_years} (spot {spot}, strike {strike})"
    )]
    DegenerateMarket {
        /// Spot price.
        spot: f64,
        /// Strike price.
        strike: f64,
        /// Time to expiry in years.
        tenor_years: f64,
    },
}

impl OptionError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidInput {
            name,
            value,
            reason,
        }
    }
}

/// Rejects NaN, infinities, and negative values.
pub(crate) fn require_non_negative(name: &'static str, value: f64) -> OptionResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(OptionError::invalid_input(
            name,
            value,
            "must be non-negative and finite",
        ));
    }
    Ok(value)
}

/// Rejects NaN, infinities, zero, and negative values.
pub(crate) fn require_positive(name: &'static str, value: f64) -> OptionResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(OptionError::invalid_input(
            name,
            value,
            "must be positive and finite",
        ));
    }
    Ok(value)
}

/// Rejects NaN and infinities.
pub(crate) fn require_finite(name: &'static str, value: f64) -> OptionResult<f64> {
    if !value.is_finite() {
        return Err(OptionError::invalid_input(name, value, "must be finite"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OptionError::invalid_input("spot", -1.0, "must be non-negative and finite");
        assert!(err.to_string().contains("spot = -1"));

        let err = OptionError::DegenerateMarket {
            spot: 1500.0,
            strike: 1000.0,
            tenor_years: 0.5,
        };
        assert!(err.to_string().contains("zero volatility"));
    }

    #[test]
    fn test_validators() {
        assert!(require_non_negative("x", 0.0).is_ok());
        assert!(require_non_negative("x", -0.1).is_err());
        assert!(require_non_negative("x", f64::NAN).is_err());
        assert!(require_positive("x", 0.0).is_err());
        assert!(require_positive("x", f64::INFINITY).is_err());
        assert!(require_finite("x", -3.0).is_ok());
        assert!(require_finite("x", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OptionError>();
    }
}
