//! Newton iteration guarded by a Brent fallback.

use log::trace;

use crate::error::{MathError, MathResult};
use crate::solvers::{brent, SolverConfig, SolverResult};

/// Newton steps attempted before handing over to Brent.
const NEWTON_BUDGET: u32 = 20;

/// Consecutive residual doublings treated as divergence.
const MAX_GROWTH: u32 = 3;

/// Slopes smaller than this in magnitude are treated as flat.
const MIN_SLOPE: f64 = 1e-15;

/// Why the Newton phase handed over to Brent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Handover {
    LeftBracket,
    Diverging,
    FlatSlope,
    NotFinite,
    Budget,
}

/// Newton-Raphson inside `bounds`, falling back to Brent's method.
///
/// Newton starts from `initial_guess` (clamped into `bounds`) and is abandoned
/// as soon as a step would leave the bracket, the residual doubles
/// [`MAX_GROWTH`] times in a row, the slope is flat or non-finite, or
/// [`NEWTON_BUDGET`] steps pass. Brent then solves on the full bracket, so
/// `bounds` must contain a sign change for the fallback to succeed.
///
/// Newton steps and Brent iterations share `config.max_iterations`; reported
/// iterations include both.
///
/// # Example
///
/// ```rust
/// use zeroliq_math::solvers::{hybrid, SolverConfig};
///
/// let f = |x: f64| x * x * x - x - 2.0;
/// let df = |x: f64| 3.0 * x * x - 1.0;
///
/// let result = hybrid(f, df, 1.5, (1.0, 2.0), &SolverConfig::default()).unwrap();
/// assert!(f(result.root).abs() < 1e-10);
/// ```
pub fn hybrid<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    bounds: (f64, f64),
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let lo = bounds.0.min(bounds.1);
    let hi = bounds.0.max(bounds.1);
    let budget = config.max_iterations.min(NEWTON_BUDGET);

    let mut x = initial_guess.clamp(lo, hi);
    let mut steps = 0;
    let mut last_residual = f64::INFINITY;
    let mut growth = 0;

    let handover = 'newton: {
        while steps < budget {
            let fx = f(x);
            if !fx.is_finite() {
                break 'newton Handover::NotFinite;
            }
            if fx.abs() < config.tolerance {
                return Ok(SolverResult {
                    root: x,
                    iterations: steps,
                    residual: fx,
                });
            }

            if fx.abs() > 2.0 * last_residual {
                growth += 1;
                if growth == MAX_GROWTH {
                    break 'newton Handover::Diverging;
                }
            } else {
                growth = 0;
            }
            last_residual = fx.abs();

            let slope = df(x);
            if !slope.is_finite() {
                break 'newton Handover::NotFinite;
            }
            if slope.abs() < MIN_SLOPE {
                break 'newton Handover::FlatSlope;
            }

            let next = x - fx / slope;
            if !(lo..=hi).contains(&next) {
                break 'newton Handover::LeftBracket;
            }

            steps += 1;
            let moved = (next - x).abs();
            x = next;

            if moved < config.step_tolerance {
                return Ok(SolverResult {
                    root: x,
                    iterations: steps,
                    residual: f(x),
                });
            }
        }
        Handover::Budget
    };

    trace!("Newton handed over at x={x} after {steps} steps ({handover:?}); Brent on [{lo}, {hi}]");

    let remaining = config.with_max_iterations(config.max_iterations - steps);
    match brent(&f, lo, hi, &remaining) {
        Ok(result) => Ok(SolverResult {
            iterations: result.iterations + steps,
            ..result
        }),
        Err(MathError::ConvergenceFailed {
            iterations,
            residual,
            best,
        }) => Err(MathError::convergence_failed(iterations + steps, residual, best)),
        Err(err) => Err(err),
    }
}
