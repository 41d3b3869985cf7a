//! # Zeroliq Loan
//!
//! Fair-strike solver for zero-liquidation loans.
//!
//! A borrower posts `c` units of collateral and receives `L` in cash plus a
//! European call on the collateral. At expiry the borrower either repays the
//! strike `K` to reclaim the collateral or walks away; there is no
//! liquidation. The loan is fair when
//!
//! ```text
//! C(S, K, σ, T, r) · c · (1 − f) + L = c · S
//! ```
//!
//! This crate finds that `K` and the simple annual rate it implies.
//!
//! - [`terms`]: the requested borrow
//! - [`objective`]: the balance being solved
//! - [`solver`]: bracketing and root finding
//! - [`config`]: solver configuration with JSON and TOML loading
//! - [`result`]: solver output and the implied rate
//!
//! # Example
//!
//! ```rust
//! use zeroliq_loan::solve_fair_strike;
//!
//! let result = solve_fair_strike(1.0, 0.0, 1000.0, 1500.0, 1.0, 30.0 / 365.0, 0.02).unwrap();
//!
//! assert!(result.converged);
//! assert!((result.strike_price - 1015.52).abs() < 0.5);
//! assert!((result.implied_annual_rate.unwrap() - 0.1889).abs() < 0.002);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod config;
pub mod error;
pub mod objective;
pub mod result;
pub mod solver;
pub mod terms;

pub use config::{SolveMethod, StrikeSolverConfig};
pub use error::{LoanError, LoanResult, Validate, ValidationError};
pub use objective::{fair_swap_objective, FairSwap};
pub use result::{implied_annual_rate, FairStrikeResult};
pub use solver::{solve_fair_strike, FairStrikeSolver};
pub use terms::LoanTerms;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use super::config::{SolveMethod, StrikeSolverConfig};
    pub use super::error::{LoanError, LoanResult, Validate};
    pub use super::objective::{fair_swap_objective, FairSwap};
    pub use super::result::{implied_annual_rate, FairStrikeResult};
    pub use super::solver::{solve_fair_strike, FairStrikeSolver};
    pub use super::terms::LoanTerms;
}
