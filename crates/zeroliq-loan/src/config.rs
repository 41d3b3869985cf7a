//! Strike solver configuration.
//!
//! Every field has a serde default, so a partial JSON or TOML document only
//! needs to name what it overrides.

use serde::{Deserialize, Serialize};

use zeroliq_options::DegenerateVolatility;

use crate::error::{LoanError, LoanResult, Validate, ValidationError};

// =============================================================================
// SOLVE METHOD
// =============================================================================

/// Algorithm used to locate the fair strike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveMethod {
    /// Brent's method on the signed residual.
    #[default]
    Brent,
    /// Bisection on the signed residual.
    Bisection,
    /// Newton on the signed residual using the analytic strike sensitivity,
    /// with a Brent fallback.
    Hybrid,
    /// Bounded minimization of the squared residual.
    MinimizeSquared,
}

impl SolveMethod {
    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            SolveMethod::Brent => "Brent",
            SolveMethod::Bisection => "Bisection",
            SolveMethod::Hybrid => "Hybrid (Newton + Brent)",
            SolveMethod::MinimizeSquared => "Bounded minimization",
        }
    }
}

// =============================================================================
// SOLVER CONFIGURATION
// =============================================================================

/// Configuration for [`FairStrikeSolver`](crate::FairStrikeSolver).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrikeSolverConfig {
    /// Algorithm used to locate the strike.
    #[serde(default)]
    pub method: SolveMethod,

    /// Tolerance on the squared objective.
    #[serde(default = "default_objective_tolerance")]
    pub objective_tolerance: f64,

    /// Tolerance on the strike, relative to spot.
    #[serde(default = "default_strike_tolerance")]
    pub strike_tolerance: f64,

    /// Iteration budget for the root finder or minimizer.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Smallest strike the search may visit.
    #[serde(default = "default_strike_floor")]
    pub strike_floor: f64,

    /// Doublings of the upper bracket end before giving up.
    #[serde(default = "default_max_bracket_doublings")]
    pub max_bracket_doublings: u32,

    /// Zero-volatility pricing policy.
    #[serde(default)]
    pub degenerate_volatility: DegenerateVolatility,
}

fn default_objective_tolerance() -> f64 {
    1e-10
}

fn default_strike_tolerance() -> f64 {
    1e-9
}

fn default_max_iterations() -> u32 {
    100
}

fn default_strike_floor() -> f64 {
    0.1
}

fn default_max_bracket_doublings() -> u32 {
    64
}

impl Default for StrikeSolverConfig {
    fn default() -> Self {
        Self {
            method: SolveMethod::default(),
            objective_tolerance: default_objective_tolerance(),
            strike_tolerance: default_strike_tolerance(),
            max_iterations: default_max_iterations(),
            strike_floor: default_strike_floor(),
            max_bracket_doublings: default_max_bracket_doublings(),
            degenerate_volatility: DegenerateVolatility::default(),
        }
    }
}

impl StrikeSolverConfig {
    /// Parses and validates a JSON document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zeroliq_loan::{SolveMethod, StrikeSolverConfig};
    ///
    /// let config = StrikeSolverConfig::from_json_str(r#"{"method": "hybrid"}"#).unwrap();
    /// assert_eq!(config.method, SolveMethod::Hybrid);
    /// assert_eq!(config.strike_floor, 0.1);
    /// ```
    pub fn from_json_str(json: &str) -> LoanResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| LoanError::config(e.to_string()))?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(document: &str) -> LoanResult<Self> {
        let config: Self = toml::from_str(document).map_err(|e| LoanError::config(e.to_string()))?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Sets the solve method.
    #[must_use]
    pub fn with_method(mut self, method: SolveMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the squared-objective tolerance.
    #[must_use]
    pub fn with_objective_tolerance(mut self, tolerance: f64) -> Self {
        self.objective_tolerance = tolerance;
        self
    }

    /// Sets the relative strike tolerance.
    #[must_use]
    pub fn with_strike_tolerance(mut self, tolerance: f64) -> Self {
        self.strike_tolerance = tolerance;
        self
    }

    /// Sets the iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the strike floor.
    #[must_use]
    pub fn with_strike_floor(mut self, floor: f64) -> Self {
        self.strike_floor = floor;
        self
    }

    /// Sets the bracket doubling budget.
    #[must_use]
    pub fn with_max_bracket_doublings(mut self, doublings: u32) -> Self {
        self.max_bracket_doublings = doublings;
        self
    }

    /// Sets the zero-volatility policy.
    #[must_use]
    pub fn with_degenerate_volatility(mut self, policy: DegenerateVolatility) -> Self {
        self.degenerate_volatility = policy;
        self
    }
}

impl Validate for StrikeSolverConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !(self.objective_tolerance.is_finite() && self.objective_tolerance > 0.0) {
            errors.push(ValidationError::new(
                "objective_tolerance",
                format!("must be positive, got {}", self.objective_tolerance),
            ));
        }

        if !(self.strike_tolerance.is_finite() && self.strike_tolerance > 0.0) {
            errors.push(ValidationError::new(
                "strike_tolerance",
                format!("must be positive, got {}", self.strike_tolerance),
            ));
        }

        if self.max_iterations == 0 {
            errors.push(ValidationError::new(
                "max_iterations",
                "must be at least 1",
            ));
        }

        if !(self.strike_floor.is_finite() && self.strike_floor > 0.0) {
            errors.push(ValidationError::new(
                "strike_floor",
                format!("must be positive, got {}", self.strike_floor),
            ));
        }

        if self.max_bracket_doublings == 0 {
            errors.push(ValidationError::new(
                "max_bracket_doublings",
                "must be at least 1",
            ));
        }

        errors
    }
}
