//! Optimization algorithms.
//!
//! This module provides a bounded scalar minimizer for problems with one
//! unknown confined to a closed interval, such as a squared pricing residual
//! over a strike range with a hard floor.

use log::trace;

use crate::error::{MathError, MathResult};

/// Configuration for optimization algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizationConfig {
    /// Objective value at or below which the search stops immediately.
    pub tolerance: f64,
    /// Absolute tolerance on the location of the minimum.
    pub step_tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for OptimizationConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            step_tolerance: 1e-8,
            max_iterations: 500,
        }
    }
}

impl OptimizationConfig {
    /// Sets the objective tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the step tolerance.
    #[must_use]
    pub fn with_step_tolerance(mut self, step_tolerance: f64) -> Self {
        self.step_tolerance = step_tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of an optimization run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizationResult {
    /// Location of the best point found.
    pub x: f64,
    /// Objective value at `x`.
    pub objective_value: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Whether a stopping tolerance was met within the iteration budget.
    pub converged: bool,
}

/// Minimizes `f` on `[lower, upper]` with Brent's method.
///
/// Alternates golden-section steps with parabolic interpolation. Every
/// evaluation lies inside the closed interval, so the bound is never violated.
///
/// Stops when `f(x) <= config.tolerance` or when the bracket around the best
/// point has shrunk to about `config.step_tolerance`. Running out of iterations
/// is not an error: the best point is returned with `converged = false`.
///
/// # Example
///
/// ```rust
/// use zeroliq_math::optimization::{minimize_bounded, OptimizationConfig};
///
/// let f = |x: f64| (x - 2.0).powi(2) + 1.0;
/// let result = minimize_bounded(f, 0.0, 5.0, &OptimizationConfig::default()).unwrap();
///
/// assert!(result.converged);
/// assert!((result.x - 2.0).abs() < 1e-6);
/// ```
pub fn minimize_bounded<F>(
    f: F,
    lower: f64,
    upper: f64,
    config: &OptimizationConfig,
) -> MathResult<OptimizationResult>
where
    F: Fn(f64) -> f64,
{
    if !lower.is_finite() || !upper.is_finite() || lower > upper {
        return Err(MathError::invalid_input(format!(
            "minimization bounds must be finite and ordered, got [{lower}, {upper}]"
        )));
    }

    // (3 - √5) / 2
    let golden_section = 0.5 * (3.0 - 5.0_f64.sqrt());
    let sqrt_eps = f64::EPSILON.sqrt();

    let mut a = lower;
    let mut b = upper;
    let mut x = a + golden_section * (b - a);
    let mut w = x;
    let mut v = x;
    let mut fx = f(x);
    let mut fw = fx;
    let mut fv = fx;
    let mut d: f64 = 0.0;
    let mut e: f64 = 0.0;

    for iteration in 0..config.max_iterations {
        let xm = 0.5 * (a + b);
        let tol1 = sqrt_eps * x.abs() + config.step_tolerance / 3.0;
        let tol2 = 2.0 * tol1;

        if fx <= config.tolerance || (x - xm).abs() <= tol2 - 0.5 * (b - a) {
            return Ok(OptimizationResult {
                x,
                objective_value: fx,
                iterations: iteration,
                converged: true,
            });
        }

        let mut take_golden = true;
        if e.abs() > tol1 {
            // Fit a parabola through x, w, v
            let r = (x - w) * (fx - fv);
            let mut q = (x - v) * (fx - fw);
            let mut p = (x - v) * q - (x - w) * r;
            q = 2.0 * (q - r);
            if q > 0.0 {
                p = -p;
            }
            q = q.abs();
            let e_prev = e;
            e = d;

            if p.abs() < (0.5 * q * e_prev).abs() && p > q * (a - x) && p < q * (b - x) {
                d = p / q;
                let u = x + d;
                if u - a < tol2 || b - u < tol2 {
                    d = tol1.copysign(xm - x);
                }
                take_golden = false;
            }
        }

        if take_golden {
            e = if x >= xm { a - x } else { b - x };
            d = golden_section * e;
        }

        let step = if d.abs() >= tol1 { d } else { tol1.copysign(d) };
        let u = (x + step).clamp(lower, upper);
        let fu = f(u);
        trace!("bounded minimizer iteration {iteration}: f({u}) = {fu:.3e}");

        if fu <= fx {
            if u >= x {
                a = x;
            } else {
                b = x;
            }
            v = w;
            fv = fw;
            w = x;
            fw = fx;
            x = u;
            fx = fu;
        } else {
            if u < x {
                a = u;
            } else {
                b = u;
            }
            if fu <= fw || w == x {
                v = w;
                fv = fw;
                w = u;
                fw = fu;
            } else if fu <= fv || v == x || v == w {
                v = u;
                fv = fu;
            }
        }
    }

    Ok(OptimizationResult {
        x,
        objective_value: fx,
        iterations: config.max_iterations,
        converged: false,
    })
}
