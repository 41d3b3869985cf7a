//! Bracket discovery for one-sided search domains.

use crate::error::{MathError, MathResult};

/// Finds a bracket `[lower, upper]` on which `f` changes sign.
///
/// The lower end is fixed (a hard floor of the search domain). The upper end
/// starts at `start` and doubles until `f(upper)` has the opposite sign of
/// `f(lower)`. A root exactly at `lower` yields `(lower, lower)`.
///
/// # Errors
///
/// - [`MathError::ConvergenceFailed`] when no sign change appears within
///   `max_doublings` doublings (or before the upper end overflows); `best` is
///   the last upper end evaluated and `iterations` the doublings spent
/// - [`MathError::InvalidInput`] when an evaluation is NaN
///
/// # Example
///
/// ```rust
/// use zeroliq_math::solvers::expand_bracket_upward;
///
/// let f = |x: f64| 5000.0 - x;
/// let (lo, hi) = expand_bracket_upward(f, 0.1, 100.0, 60).unwrap();
/// assert_eq!(lo, 0.1);
/// assert!(hi >= 5000.0);
/// ```
pub fn expand_bracket_upward<F>(
    f: F,
    lower: f64,
    start: f64,
    max_doublings: u32,
) -> MathResult<(f64, f64)>
where
    F: Fn(f64) -> f64,
{
    let f_lower = f(lower);
    if f_lower.is_nan() {
        return Err(MathError::invalid_input(format!(
            "function is undefined at the lower end {lower}"
        )));
    }
    if f_lower == 0.0 {
        return Ok((lower, lower));
    }

    let mut upper = if start > lower { start } else { lower + 1.0 };
    let mut f_upper = f(upper);
    let mut doublings = 0;

    loop {
        if f_upper.is_nan() {
            return Err(MathError::invalid_input(format!(
                "function is undefined at {upper}"
            )));
        }
        if f_upper == 0.0 || f_upper.signum() != f_lower.signum() {
            return Ok((lower, upper));
        }

        let next = 2.0 * upper;
        if doublings == max_doublings || !next.is_finite() {
            return Err(MathError::convergence_failed(
                doublings,
                f_upper.abs(),
                upper,
            ));
        }
        upper = next;
        f_upper = f(upper);
        doublings += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_above_start() {
        let f = |x: f64| 1000.0 - x;

        let (lo, hi) = expand_bracket_upward(f, 0.1, 10.0, 60).unwrap();

        assert_eq!(lo, 0.1);
        assert!(f(lo) > 0.0 && f(hi) <= 0.0);
    }

    #[test]
    fn test_root_below_start() {
        let f = |x: f64| 50.0 - x;

        let (lo, hi) = expand_bracket_upward(f, 0.1, 1500.0, 60).unwrap();

        assert_eq!((lo, hi), (0.1, 1500.0));
    }

    #[test]
    fn test_exhaustion_reports_last_upper() {
        let f = |x: f64| 1.0 + x;

        match expand_bracket_upward(f, 0.1, 1.0, 10) {
            Err(MathError::ConvergenceFailed {
                iterations, best, ..
            }) => {
                assert_eq!(iterations, 10);
                assert_eq!(best, 1024.0);
            }
            other => panic!("expected ConvergenceFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_overflow_stops_search() {
        let f = |x: f64| 1.0 + x;

        let err = expand_bracket_upward(f, 0.1, 1.0, u32::MAX).unwrap_err();

        let best = err.best_estimate().unwrap();
        assert!(best.is_finite());
        assert!(best > 1e300);
    }

    #[test]
    fn test_nan_is_rejected() {
        let f = |x: f64| if x > 5.0 { f64::NAN } else { 1.0 };

        let result = expand_bracket_upward(f, 0.1, 1.0, 10);
        assert!(matches!(result, Err(MathError::InvalidInput { .. })));
    }

    #[test]
    fn test_root_at_lower() {
        let f = |x: f64| x - 2.0;

        assert_eq!(expand_bracket_upward(f, 2.0, 10.0, 10).unwrap(), (2.0, 2.0));
    }

    #[test]
    fn test_start_not_above_lower() {
        let f = |x: f64| 3.0 - x;

        let (lo, hi) = expand_bracket_upward(f, 1.0, 0.5, 10).unwrap();

        assert_eq!(lo, 1.0);
        assert!(hi >= 3.0);
    }
}
