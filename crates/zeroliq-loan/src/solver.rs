//! Fair-strike solver.
//!
//! This module provides [`FairStrikeSolver`], which finds the strike `K*` at
//! which the embedded call balances the swap of collateral for loan cash (see
//! [`FairSwap`](crate::objective::FairSwap)).
//!
//! # Search
//!
//! 1. Reject loans no strike can balance (`Unsolvable`): at or above the
//!    collateral value, or below the fee taken on the collateral, where even
//!    a zero strike leaves the option leg short.
//! 2. If the balance is already non-positive at the strike floor, the fair
//!    strike is at or below the floor: return the floor, flagged as
//!    non-converged unless the balance there is within tolerance.
//! 3. Bracket the root by doubling an upper strike from spot. If the doubling
//!    budget runs out, the last upper strike is returned as non-converged.
//! 4. Run the configured method inside `[floor, upper]`.

use log::{debug, trace};

use zeroliq_math::optimization::{minimize_bounded, OptimizationConfig};
use zeroliq_math::solvers::{
    expand_bracket_upward, BisectionSolver, BrentSolver, HybridSolver, Solver, SolverConfig,
    SolverResult,
};
use zeroliq_math::MathError;
use zeroliq_options::{BlackScholes, DegenerateVolatility, MarketParameters};

use crate::config::{SolveMethod, StrikeSolverConfig};
use crate::error::{LoanError, LoanResult, Validate};
use crate::objective::FairSwap;
use crate::result::{implied_annual_rate, FairStrikeResult};
use crate::terms::LoanTerms;

/// Solver for the strike that makes a zero-liquidation loan fair.
///
/// # Example
///
/// ```rust
/// use zeroliq_loan::{FairStrikeSolver, LoanTerms, SolveMethod, StrikeSolverConfig};
/// use zeroliq_options::MarketParameters;
///
/// let solver = FairStrikeSolver::with_config(
///     StrikeSolverConfig::default().with_method(SolveMethod::Hybrid),
/// );
/// let terms = LoanTerms::new(1.0, 1000.0, 0.0).unwrap();
/// let market = MarketParameters::new(1500.0, 1.0, 0.02, 30.0 / 365.0).unwrap();
///
/// let result = solver.solve(&terms, &market).unwrap();
/// assert!(result.converged);
/// assert!((result.strike_price - 1015.52).abs() < 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FairStrikeSolver {
    config: StrikeSolverConfig,
}

impl FairStrikeSolver {
    /// Creates a solver with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with a specific configuration.
    pub fn with_config(config: StrikeSolverConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &StrikeSolverConfig {
        &self.config
    }

    /// Solves for the fair strike.
    ///
    /// # Errors
    ///
    /// - [`LoanError::InvalidInput`] for invalid terms or market state
    /// - [`LoanError::Config`] for an invalid configuration
    /// - [`LoanError::Unsolvable`] when no strike can balance the swap (see
    ///   [`LoanTerms::is_solvable_at`])
    /// - [`LoanError::DegenerateMarket`] for zero volatility with time remaining
    ///   under [`DegenerateVolatility::Reject`]
    /// - [`LoanError::Numerical`] if the balance cannot be evaluated
    ///
    /// Running out of iterations or bracket doublings is not an error; the
    /// result carries `converged = false` and the best strike found.
    pub fn solve(
        &self,
        terms: &LoanTerms,
        market: &MarketParameters,
    ) -> LoanResult<FairStrikeResult> {
        self.config.validate_or_error()?;

        let model =
            BlackScholes::new().with_degenerate_volatility(self.config.degenerate_volatility);
        let swap = FairSwap::new(*terms, *market, model)?;

        let spot = market.spot_price;
        let floor = self.config.strike_floor;

        if !terms.is_solvable_at(spot) {
            return Err(LoanError::Unsolvable {
                loan_amount_out: terms.loan_amount_out,
                collateral_value: terms.collateral_value(spot),
                fee_rate: terms.fee_rate,
            });
        }

        // Every strike the search visits other than spot would be rejected
        if self.config.degenerate_volatility == DegenerateVolatility::Reject
            && market.volatility == 0.0
            && market.tenor_years > 0.0
        {
            return Err(LoanError::DegenerateMarket {
                spot,
                strike: floor,
                tenor_years: market.tenor_years,
            });
        }

        debug!(
            "solving fair strike: ltv={:.4}, target call value={:.6}, method={}",
            terms.loan_to_value(spot),
            swap.target_option_value(),
            self.config.method.name()
        );

        let at_floor = swap.residual(floor)?;
        if at_floor <= 0.0 {
            let objective = at_floor * at_floor;
            let converged = objective <= self.config.objective_tolerance;
            debug!(
                "fair strike at or below floor {floor} (residual {at_floor:.3e}), converged={converged}"
            );
            return Ok(self.finish(terms, market, floor, objective, 0, converged));
        }

        let residual = |strike: f64| {
            let g = swap.residual(strike).unwrap_or(f64::NAN);
            trace!("g({strike}) = {g:.6e}");
            g
        };

        let bracket = expand_bracket_upward(
            &residual,
            floor,
            spot.max(floor),
            self.config.max_bracket_doublings,
        );
        let (lower, upper) = match bracket {
            Ok(bracket) => bracket,
            Err(MathError::ConvergenceFailed {
                iterations, best, ..
            }) => {
                let objective = swap.objective(best)?;
                debug!(
                    "no sign change within {iterations} doublings; best upper strike {best} (objective {objective:.3e})"
                );
                return Ok(self.finish(terms, market, best, objective, iterations, false));
            }
            Err(err) => return Err(err.into()),
        };
        debug!("fair strike bracketed in [{lower}, {upper}]");

        let step_tolerance = self.config.strike_tolerance * spot;

        if self.config.method == SolveMethod::MinimizeSquared {
            let objective = |strike: f64| swap.objective(strike).unwrap_or(f64::INFINITY);
            let opt_config = OptimizationConfig {
                tolerance: self.config.objective_tolerance,
                step_tolerance,
                max_iterations: self.config.max_iterations,
            };
            let found = minimize_bounded(objective, lower, upper, &opt_config)?;
            debug!(
                "minimizer finished: strike={}, objective={:.3e}, converged={}",
                found.x, found.objective_value, found.converged
            );
            return Ok(self.finish(
                terms,
                market,
                found.x,
                found.objective_value,
                found.iterations,
                found.converged,
            ));
        }

        let root_config = SolverConfig::new(
            self.config.objective_tolerance.sqrt(),
            step_tolerance,
            self.config.max_iterations,
        );
        let no_derivative: Option<fn(f64) -> f64> = None;
        let bounds = (lower, upper);

        let outcome = match self.config.method {
            SolveMethod::Bisection => {
                BisectionSolver.solve(&residual, no_derivative, spot, bounds, &root_config)
            }
            SolveMethod::Hybrid => {
                let slope = |strike: f64| swap.residual_slope(strike).unwrap_or(f64::NAN);
                HybridSolver.solve(&residual, Some(slope), spot, bounds, &root_config)
            }
            SolveMethod::Brent | SolveMethod::MinimizeSquared => {
                BrentSolver.solve(&residual, no_derivative, spot, bounds, &root_config)
            }
        };

        match outcome {
            Ok(SolverResult {
                root, iterations, ..
            }) => {
                let objective = swap.objective(root)?;
                debug!("fair strike {root} after {iterations} iterations (objective {objective:.3e})");
                Ok(self.finish(terms, market, root, objective, iterations, true))
            }
            Err(MathError::ConvergenceFailed {
                iterations, best, ..
            }) => {
                let objective = swap.objective(best)?;
                let converged = objective <= self.config.objective_tolerance;
                debug!(
                    "iteration budget exhausted at strike {best} (objective {objective:.3e})"
                );
                Ok(self.finish(terms, market, best, objective, iterations, converged))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn finish(
        &self,
        terms: &LoanTerms,
        market: &MarketParameters,
        strike_price: f64,
        objective: f64,
        iterations: u32,
        converged: bool,
    ) -> FairStrikeResult {
        FairStrikeResult {
            strike_price,
            implied_annual_rate: implied_annual_rate(
                strike_price,
                terms.loan_amount_out,
                market.tenor_years,
            ),
            converged,
            objective,
            iterations,
            method: self.config.method,
        }
    }
}

/// Solves for the fair strike with the default configuration.
///
/// # Example
///
/// ```rust
/// use zeroliq_loan::solve_fair_strike;
///
/// let result = solve_fair_strike(1.0, 0.0, 700.0, 1500.0, 1.0, 30.0 / 365.0, 0.02).unwrap();
/// assert!(result.converged);
/// assert!((result.strike_price - 701.5).abs() < 0.1);
/// ```
pub fn solve_fair_strike(
    collateral_amount: f64,
    fee_rate: f64,
    loan_amount_out: f64,
    spot: f64,
    volatility: f64,
    tenor_years: f64,
    risk_free_rate: f64,
) -> LoanResult<FairStrikeResult> {
    let terms = LoanTerms::new(collateral_amount, loan_amount_out, fee_rate)?;
    let market = MarketParameters::new(spot, volatility, risk_free_rate, tenor_years)?;
    FairStrikeSolver::new().solve(&terms, &market)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const T30: f64 = 30.0 / 365.0;

    fn market() -> MarketParameters {
        MarketParameters::new(1500.0, 1.0, 0.02, T30).unwrap()
    }

    fn solve_with(method: SolveMethod, loan: f64) -> FairStrikeResult {
        let solver =
            FairStrikeSolver::with_config(StrikeSolverConfig::default().with_method(method));
        solver
            .solve(&LoanTerms::new(1.0, loan, 0.0).unwrap(), &market())
            .unwrap()
    }

    #[test]
    fn test_methods_agree() {
        let reference = solve_with(SolveMethod::Brent, 1000.0);
        assert!(reference.converged);

        for method in [
            SolveMethod::Bisection,
            SolveMethod::Hybrid,
            SolveMethod::MinimizeSquared,
        ] {
            let result = solve_with(method, 1000.0);
            assert!(result.converged, "{} did not converge", method.name());
            assert_eq!(result.method, method);
            assert_abs_diff_eq!(result.strike_price, reference.strike_price, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_root_balances_swap() {
        let result = solve_with(SolveMethod::Brent, 700.0);
        let call = zeroliq_options::price_call(1500.0, result.strike_price, 1.0, T30, 0.02).unwrap();

        assert!(result.objective <= 1e-10);
        assert_abs_diff_eq!(call, 800.0, epsilon = 1e-5);
    }

    #[test]
    fn test_unsolvable_loan() {
        let err = FairStrikeSolver::new()
            .solve(&LoanTerms::new(1.0, 1500.0, 0.0).unwrap(), &market())
            .unwrap_err();
        assert!(matches!(err, LoanError::Unsolvable { .. }));
    }

    #[test]
    fn test_unsolvable_with_fees() {
        // Between c·S and c·S/(1 − f): still no strike balances the swap
        let err = FairStrikeSolver::new()
            .solve(&LoanTerms::new(1.0, 1600.0, 0.2).unwrap(), &market())
            .unwrap_err();
        assert!(matches!(err, LoanError::Unsolvable { .. }));
    }

    #[test]
    fn test_fee_above_loan_unsolvable() {
        // g(0) = L − c·S·f = 100 − 750 < 0: no strike balances the swap
        let err = solve_fair_strike(1.0, 0.5, 100.0, 1500.0, 1.0, 0.1, 0.02).unwrap_err();
        assert!(matches!(
            err,
            LoanError::Unsolvable { fee_rate, .. } if fee_rate == 0.5
        ));
    }

    #[test]
    fn test_bracket_exhaustion_reported() {
        // Root near 3136.66, but only 1500 and 3000 may be tried
        let config = StrikeSolverConfig::default().with_max_bracket_doublings(1);
        let result = FairStrikeSolver::with_config(config)
            .solve(&LoanTerms::new(1.0, 1499.0, 0.0).unwrap(), &market())
            .unwrap();

        assert!(!result.converged);
        assert_eq!(result.strike_price, 3000.0);
        assert_eq!(result.iterations, 1);
        assert!(matches!(
            result.require_converged(),
            Err(LoanError::NonConvergent { .. })
        ));
    }

    #[test]
    fn test_root_beyond_default_doublings() {
        // Very high total variance pushes the fair strike past 1500·2^64
        for method in [SolveMethod::Brent, SolveMethod::Hybrid] {
            let solver =
                FairStrikeSolver::with_config(StrikeSolverConfig::default().with_method(method));
            let terms = LoanTerms::new(1.0, 100.0, 0.0).unwrap();
            let market = MarketParameters::new(1500.0, 5.0, 0.02, 10.0).unwrap();

            let result = solver.solve(&terms, &market).unwrap();

            assert!(!result.converged);
            assert_eq!(result.iterations, 64);
            assert!(result.strike_price > 1500.0 * 2f64.powi(63));
        }
    }

    #[test]
    fn test_zero_loan_pins_to_floor() {
        let result = FairStrikeSolver::new()
            .solve(&LoanTerms::new(1.0, 0.0, 0.0).unwrap(), &market())
            .unwrap();

        assert_eq!(result.strike_price, 0.1);
        assert!(!result.converged);
        assert!(result.implied_annual_rate.is_none());
    }

    #[test]
    fn test_budget_exhaustion_reported() {
        let config = StrikeSolverConfig::default()
            .with_method(SolveMethod::Bisection)
            .with_max_iterations(3);
        let result = FairStrikeSolver::with_config(config)
            .solve(&LoanTerms::new(1.0, 1000.0, 0.0).unwrap(), &market())
            .unwrap();

        assert!(!result.converged);
        assert!(result.strike_price >= 0.1);
        assert!(result.require_converged().is_err());
    }

    #[test]
    fn test_reject_policy_with_zero_volatility() {
        let config = StrikeSolverConfig::default()
            .with_degenerate_volatility(DegenerateVolatility::Reject);
        let zero_vol = market().with_volatility(0.0);

        let err = FairStrikeSolver::with_config(config)
            .solve(&LoanTerms::new(1.0, 1000.0, 0.0).unwrap(), &zero_vol)
            .unwrap_err();
        assert!(matches!(err, LoanError::DegenerateMarket { .. }));
    }

    #[test]
    fn test_zero_volatility_discounted_intrinsic() {
        // Deterministic payoff: S − K·e^(−rT) = S − L  →  K = L·e^(rT)
        let zero_vol = market().with_volatility(0.0);
        let result = FairStrikeSolver::new()
            .solve(&LoanTerms::new(1.0, 1000.0, 0.0).unwrap(), &zero_vol)
            .unwrap();

        assert!(result.converged);
        assert_abs_diff_eq!(
            result.strike_price,
            1000.0 * (0.02 * T30).exp(),
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = StrikeSolverConfig::default().with_strike_floor(-1.0);
        let err = FairStrikeSolver::with_config(config)
            .solve(&LoanTerms::new(1.0, 1000.0, 0.0).unwrap(), &market())
            .unwrap_err();
        assert!(matches!(err, LoanError::Config(_)));
    }

    #[test]
    fn test_free_function_validates() {
        assert!(matches!(
            solve_fair_strike(0.0, 0.0, 700.0, 1500.0, 1.0, T30, 0.02),
            Err(LoanError::InvalidInput(_))
        ));
        assert!(matches!(
            solve_fair_strike(1.0, 1.0, 700.0, 1500.0, 1.0, T30, 0.02),
            Err(LoanError::InvalidInput(_))
        ));
        assert!(matches!(
            solve_fair_strike(1.0, 0.0, 700.0, 1500.0, -1.0, T30, 0.02),
            Err(LoanError::InvalidInput(_))
        ));
    }
}
