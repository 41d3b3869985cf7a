//! Scalar root finders on a bracketing interval.
//!
//! Every finder here works inside an explicit `[a, b]` and never evaluates
//! outside it:
//!
//! - [`brent`]: inverse quadratic interpolation with bisection safeguards
//! - [`bisection`]: interval halving
//! - [`hybrid`]: Newton steps with a Brent fallback
//! - [`expand_bracket_upward`]: finds a bracket above a fixed lower end
//!
//! | Finder | Convergence | Needs |
//! |--------|-------------|-------|
//! | Brent | superlinear | sign change |
//! | Bisection | linear | sign change |
//! | Hybrid | quadratic near the root | sign change, derivative, start point |
//!
//! # Example
//!
//! ```rust
//! use zeroliq_math::solvers::{brent, expand_bracket_upward, SolverConfig};
//!
//! // Decreasing residual with a root at 1015.0
//! let residual = |k: f64| 1015.0 - k;
//!
//! let (lo, hi) = expand_bracket_upward(residual, 0.1, 1500.0, 60).unwrap();
//! let result = brent(residual, lo, hi, &SolverConfig::default()).unwrap();
//! assert!((result.root - 1015.0).abs() < 1e-8);
//! ```

mod bisection;
mod bracket;
mod brent;
mod hybrid;

pub use bisection::bisection;
pub use bracket::expand_bracket_upward;
pub use brent::brent;
pub use hybrid::hybrid;

use crate::error::MathResult;

/// Termination settings shared by all root finders.
///
/// A finder stops successfully on whichever comes first: `|f(x)|` below
/// `tolerance`, or the bracket (or Newton step) narrower than
/// `step_tolerance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Threshold on `|f(x)|`.
    pub tolerance: f64,
    /// Threshold on the bracket half-width or step length, in units of `x`.
    pub step_tolerance: f64,
    /// Iteration budget.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(1e-10, 1e-10, 100)
    }
}

impl SolverConfig {
    /// Creates a configuration from its three thresholds.
    #[must_use]
    pub fn new(tolerance: f64, step_tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            step_tolerance,
            max_iterations,
        }
    }

    /// Replaces the residual threshold.
    #[must_use]
    pub fn with_tolerance(self, tolerance: f64) -> Self {
        Self { tolerance, ..self }
    }

    /// Replaces the step threshold.
    #[must_use]
    pub fn with_step_tolerance(self, step_tolerance: f64) -> Self {
        Self {
            step_tolerance,
            ..self
        }
    }

    /// Replaces the iteration budget.
    #[must_use]
    pub fn with_max_iterations(self, max_iterations: u32) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }
}

/// A located root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// Abscissa of the root.
    pub root: f64,
    /// Iterations spent.
    pub iterations: u32,
    /// `f(root)`, signed.
    pub residual: f64,
}

/// Common entry point over the bracketed finders.
///
/// Lets a caller pick the algorithm at runtime while passing the same
/// arguments; finders that have no use for the derivative or the start point
/// ignore them.
///
/// # Example
///
/// ```rust
/// use zeroliq_math::solvers::{BrentSolver, Solver, SolverConfig};
///
/// let no_deriv: Option<fn(f64) -> f64> = None;
/// let result = BrentSolver
///     .solve(|x| x * x - 2.0, no_deriv, 1.5, (1.0, 2.0), &SolverConfig::default())
///     .unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub trait Solver: Send + Sync {
    /// Finds a root of `f` inside `bounds`.
    fn solve<F, D>(
        &self,
        f: F,
        derivative: Option<D>,
        initial_guess: f64,
        bounds: (f64, f64),
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64;

    /// Display name of the algorithm.
    fn name(&self) -> &'static str;
}

/// [`brent`] behind the [`Solver`] interface.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrentSolver;

impl Solver for BrentSolver {
    fn solve<F, D>(
        &self,
        f: F,
        _derivative: Option<D>,
        _initial_guess: f64,
        (a, b): (f64, f64),
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        brent(f, a, b, config)
    }

    fn name(&self) -> &'static str {
        "Brent"
    }
}

/// [`bisection`] behind the [`Solver`] interface.
#[derive(Debug, Clone, Copy, Default)]
pub struct BisectionSolver;

impl Solver for BisectionSolver {
    fn solve<F, D>(
        &self,
        f: F,
        _derivative: Option<D>,
        _initial_guess: f64,
        (a, b): (f64, f64),
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        bisection(f, a, b, config)
    }

    fn name(&self) -> &'static str {
        "Bisection"
    }
}

/// [`hybrid`] behind the [`Solver`] interface; plain Brent when no
/// derivative is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct HybridSolver;

impl Solver for HybridSolver {
    fn solve<F, D>(
        &self,
        f: F,
        derivative: Option<D>,
        initial_guess: f64,
        bounds: (f64, f64),
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        if let Some(df) = derivative {
            hybrid(f, df, initial_guess, bounds, config)
        } else {
            brent(f, bounds.0, bounds.1, config)
        }
    }

    fn name(&self) -> &'static str {
        "Hybrid (Newton + Brent)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // Same shape as a strike residual: positive near zero, decaying through a root.
    fn decaying(k: f64) -> f64 {
        800.0 * (-k / 900.0).exp() - 300.0
    }

    fn decaying_slope(k: f64) -> f64 {
        -800.0 / 900.0 * (-k / 900.0).exp()
    }

    #[test]
    fn test_builders_replace_one_field() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_step_tolerance(1e-6)
            .with_max_iterations(50);

        assert_eq!(config, SolverConfig::new(1e-8, 1e-6, 50));
        assert_eq!(SolverConfig::default().max_iterations, 100);
    }

    #[test]
    fn test_finders_agree() {
        let config = SolverConfig::default();
        let none: Option<fn(f64) -> f64> = None;
        let expected = 900.0 * (800.0_f64 / 300.0).ln();

        let roots = [
            BrentSolver.solve(decaying, none, 500.0, (0.1, 3000.0), &config),
            BisectionSolver.solve(decaying, none, 500.0, (0.1, 3000.0), &config),
            HybridSolver.solve(decaying, Some(decaying_slope), 500.0, (0.1, 3000.0), &config),
            HybridSolver.solve(decaying, none, 500.0, (0.1, 3000.0), &config),
        ];

        for root in roots {
            assert_relative_eq!(root.unwrap().root, expected, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_brent_needs_fewer_iterations() {
        let config = SolverConfig::default();

        let fast = brent(decaying, 0.1, 3000.0, &config).unwrap();
        let slow = bisection(decaying, 0.1, 3000.0, &config).unwrap();

        assert!(fast.iterations < slow.iterations);
    }

    #[test]
    fn test_names() {
        assert_eq!(BrentSolver.name(), "Brent");
        assert_eq!(BisectionSolver.name(), "Bisection");
        assert_eq!(HybridSolver.name(), "Hybrid (Newton + Brent)");
    }
}
