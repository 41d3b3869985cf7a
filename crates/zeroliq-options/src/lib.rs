//! European option pricing for zero-liquidation loans.
//!
//! A zero-liquidation loan swaps collateral for loan cash plus a call option
//! on that collateral. This crate values the call:
//!
//! - [`black_scholes`]: closed-form Black-Scholes pricer with explicit boundary cases
//! - [`market`]: the market snapshot a price is computed against
//! - [`option`]: the call option value type
//!
//! # Example
//!
//! ```rust
//! use zeroliq_options::price_call;
//!
//! let value = price_call(1500.0, 702.0, 1.0, 30.0 / 365.0, 0.02).unwrap();
//! assert!((value - 799.51).abs() < 0.01);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]

pub mod black_scholes;
pub mod error;
pub mod market;
pub mod option;

pub use black_scholes::{price_call, BlackScholes, DegenerateVolatility};
pub use error::{OptionError, OptionResult};
pub use market::MarketParameters;
pub use option::CallOption;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use super::black_scholes::{price_call, BlackScholes, DegenerateVolatility};
    pub use super::error::{OptionError, OptionResult};
    pub use super::market::MarketParameters;
    pub use super::option::CallOption;
}
