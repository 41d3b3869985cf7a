//! Errors from root finding and minimization.

use thiserror::Error;

/// Result type for numerical routines.
pub type MathResult<T> = Result<T, MathError>;

/// Failure of a numerical routine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// The iteration budget ran out before the tolerance was met.
    ///
    /// The best estimate is kept so callers can still use it.
    #[error("no convergence after {iterations} iterations (best {best}, |f| = {residual:.2e})")]
    ConvergenceFailed {
        /// Iterations spent.
        iterations: u32,
        /// `|f(best)|`.
        residual: f64,
        /// Best estimate found.
        best: f64,
    },

    /// The interval endpoints do not bracket a root.
    #[error("[{a}, {b}] does not bracket a root: f(a) = {fa:.2e}, f(b) = {fb:.2e}")]
    InvalidBracket {
        /// First endpoint.
        a: f64,
        /// Second endpoint.
        b: f64,
        /// `f(a)`.
        fa: f64,
        /// `f(b)`.
        fb: f64,
    },

    /// An argument is outside the routine's domain.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong.
        reason: String,
    },
}

impl MathError {
    /// Budget exhausted at `best`.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64, best: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
            best,
        }
    }

    /// Argument outside the domain.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// The best estimate, if this is a convergence failure.
    pub fn best_estimate(&self) -> Option<f64> {
        if let Self::ConvergenceFailed { best, .. } = self {
            Some(*best)
        } else {
            None
        }
    }
}
