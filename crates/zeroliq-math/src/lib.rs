//! # Zeroliq Math
//!
//! Numerical building blocks for the Zeroliq loan pricing library.
//!
//! This crate provides:
//!
//! - **Distributions**: Standard normal CDF
//! - **Solvers**: Bracketed root-finding (Brent, Bisection) and a Newton/Brent hybrid
//! - **Optimization**: Bounded one-dimensional minimization
//!
//! ## Design Philosophy
//!
//! - **Scalar and bounded**: Every routine works on a single `f64` unknown
//!   inside an explicit interval
//! - **No silent failures**: Exhausted iteration budgets are errors that still
//!   carry the best estimate found
//! - **Pure**: No shared state; every call is independent

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod distributions;
pub mod error;
pub mod optimization;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::distributions::norm_cdf;
    pub use crate::error::{MathError, MathResult};
    pub use crate::optimization::{minimize_bounded, OptimizationConfig, OptimizationResult};
    pub use crate::solvers::{
        bisection, brent, expand_bracket_upward, hybrid, BisectionSolver, BrentSolver,
        HybridSolver, Solver, SolverConfig, SolverResult,
    };
}

pub use error::{MathError, MathResult};
