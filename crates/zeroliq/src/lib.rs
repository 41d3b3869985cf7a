//! # Zeroliq
//!
//! Pricing for zero-liquidation loans: a Black-Scholes call pricer and the
//! solver for the strike that makes a loan fair.
//!
//! This crate re-exports the workspace members:
//!
//! - [`math`]: root finders, bounded minimization, the normal distribution
//! - [`options`]: the call pricer and market parameters
//! - [`loan`]: loan terms, the fair-strike solver, and its configuration
//!
//! # Example
//!
//! ```rust
//! use zeroliq::prelude::*;
//!
//! let t = 30.0 / 365.0;
//! let call = price_call(1500.0, 702.0, 1.0, t, 0.02).unwrap();
//! assert!((call - 799.51).abs() < 0.01);
//!
//! let result = solve_fair_strike(1.0, 0.0, 700.0, 1500.0, 1.0, t, 0.02).unwrap();
//! assert!(result.converged);
//! assert!((result.strike_price - 701.5).abs() < 0.1);
//! ```

#![warn(missing_docs)]

pub use zeroliq_loan as loan;
pub use zeroliq_math as math;
pub use zeroliq_options as options;

pub use zeroliq_loan::{
    fair_swap_objective, implied_annual_rate, solve_fair_strike, FairStrikeResult,
    FairStrikeSolver, LoanError, LoanResult, LoanTerms, SolveMethod, StrikeSolverConfig,
};
pub use zeroliq_options::{price_call, BlackScholes, DegenerateVolatility, MarketParameters};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use zeroliq_loan::prelude::*;
    pub use zeroliq_options::prelude::*;
}
