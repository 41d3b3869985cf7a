//! Bisection on a sign-changing interval.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Finds a root of `f` in `[a, b]` by interval halving.
///
/// The interval is oriented once so that `f(neg) < 0 < f(pos)`; each step
/// replaces whichever end has the same sign as the midpoint. Signs are
/// compared directly rather than through `f(a) * f(b)`, which can overflow or
/// underflow for large or tiny residuals.
///
/// Slower than [`brent`](super::brent) but needs nothing beyond continuity and
/// a sign change.
///
/// # Example
///
/// ```rust
/// use zeroliq_math::solvers::{bisection, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
///
/// let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let fa = f(a);
    let fb = f(b);

    if fa.is_nan() || fb.is_nan() {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }
    for (x, fx) in [(a, fa), (b, fb)] {
        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: 0,
                residual: fx,
            });
        }
    }
    if fa.is_sign_negative() == fb.is_sign_negative() {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }

    let (mut neg, mut pos) = if fa < 0.0 { (a, b) } else { (b, a) };

    for iteration in 1..=config.max_iterations {
        let mid = neg + 0.5 * (pos - neg);
        let f_mid = f(mid);

        if f_mid.abs() < config.tolerance || 0.5 * (pos - neg).abs() < config.step_tolerance {
            return Ok(SolverResult {
                root: mid,
                iterations: iteration,
                residual: f_mid,
            });
        }

        if f_mid < 0.0 {
            neg = mid;
        } else {
            pos = mid;
        }
    }

    let best = neg + 0.5 * (pos - neg);
    Err(MathError::convergence_failed(
        config.max_iterations,
        f(best).abs(),
        best,
    ))
}
