//! Implied-volatility solver.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use num_traits::Float;
use quant_core::math::solvers::{
    BisectionSolver, NewtonRaphsonSolver, RootEstimate, SecantSolver, SolverConfig,
};
use quant_core::types::MethodParseError;

use super::{ImpliedVolConfig, ImpliedVolEstimate};
use crate::analytical::BlackScholes;

/// Root-finding method used for an implied-volatility solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IvMethod {
    /// Interval-halving search over the volatility bracket.
    Bisection,
    /// Newton-Raphson iteration using the analytic vega as the derivative.
    NewtonRaphson,
    /// Secant iteration approximating the derivative from two iterates.
    Secant,
}

impl IvMethod {
    /// All methods, in dispatch order.
    pub const ALL: [IvMethod; 3] = [IvMethod::Bisection, IvMethod::NewtonRaphson, IvMethod::Secant];

    /// Canonical lower-case name.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            IvMethod::Bisection => "bisection",
            IvMethod::NewtonRaphson => "newton",
            IvMethod::Secant => "secant",
        }
    }
}

impl fmt::Display for IvMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IvMethod {
    type Err = MethodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bisection" => Ok(IvMethod::Bisection),
            "newton" | "newton-raphson" | "newton_raphson" => Ok(IvMethod::NewtonRaphson),
            "secant" => Ok(IvMethod::Secant),
            _ => Err(MethodParseError::UnknownMethod {
                name: s.to_string(),
                expected: "bisection, newton, secant",
            }),
        }
    }
}

/// Implied-volatility solver for a European option quote.
///
/// Binds a [`BlackScholes`] model and an observed market price into the
/// objective `price(σ) - market` and hands it to the generic root finders,
/// recording wall-clock time and convergence diagnostics per solve.
///
/// Solving is best-effort and never fails outright: a quote outside the
/// no-arbitrage range, or an iteration cap exhausted, degrades to an
/// estimate whose [`is_success`](ImpliedVolEstimate::is_success) is `false`.
///
/// # Examples
///
/// Recovering the implied volatility of a short-dated equity put quote:
///
/// ```
/// use quant_models::analytical::BlackScholes;
/// use quant_models::implied::{ImpliedVolSolver, IvMethod};
/// use quant_models::instruments::{OptionContract, OptionKind};
///
/// let contract = OptionContract::new(
///     130.0_f64, // strike
///     130.694,   // spot
///     0.021918,  // expiry (8 calendar days)
///     0.0423,    // rate
///     0.0,       // dividend yield
///     OptionKind::Put,
/// )?;
/// let solver = ImpliedVolSolver::new(BlackScholes::new(contract), 3.175);
///
/// let estimate = solver.solve(IvMethod::Bisection);
/// assert!(estimate.is_success());
/// assert!((estimate.vol - 0.4637).abs() < 5e-3);
/// assert!(estimate.residual < 1e-6);
/// # Ok::<(), quant_models::instruments::ModelError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ImpliedVolSolver<T: Float> {
    model: BlackScholes<T>,
    market_price: T,
    config: ImpliedVolConfig<T>,
}

impl<T: Float> ImpliedVolSolver<T> {
    /// Create a solver for a model and market quote with default
    /// configuration.
    pub fn new(model: BlackScholes<T>, market_price: T) -> Self {
        Self {
            model,
            market_price,
            config: ImpliedVolConfig::default(),
        }
    }

    /// Create a solver with an explicit configuration.
    pub fn with_config(model: BlackScholes<T>, market_price: T, config: ImpliedVolConfig<T>) -> Self {
        Self {
            model,
            market_price,
            config,
        }
    }

    /// Returns the model being inverted.
    #[inline]
    pub fn model(&self) -> &BlackScholes<T> {
        &self.model
    }

    /// Returns the market price being matched.
    #[inline]
    pub fn market_price(&self) -> T {
        self.market_price
    }

    /// Returns a reference to the solver configuration.
    #[inline]
    pub fn config(&self) -> &ImpliedVolConfig<T> {
        &self.config
    }

    /// Solve with the given method.
    pub fn solve(&self, method: IvMethod) -> ImpliedVolEstimate<T> {
        match method {
            IvMethod::Bisection => self.bisection(),
            IvMethod::NewtonRaphson => self.newton_raphson(),
            IvMethod::Secant => self.secant(),
        }
    }

    /// Bisection over the configured volatility bracket.
    ///
    /// The robust default: once the quote is bracketed the search cannot
    /// diverge. A quote outside the model prices at the bracket endpoints
    /// comes back with `bracketed == false`.
    pub fn bisection(&self) -> ImpliedVolEstimate<T> {
        let start = Instant::now();
        let solver = BisectionSolver::new(SolverConfig {
            tolerance: self.config.tolerance,
            max_iterations: self.config.bisection_max_iterations,
        });
        let (low, high) = self.config.bracket;
        let estimate = solver.find_root(|sigma| self.objective(sigma), low, high);
        self.finish(IvMethod::Bisection, estimate, start)
    }

    /// Newton-Raphson from the configured seed, using the analytic vega.
    ///
    /// Fast near the money where vega is healthy; for deep out-of-the-money
    /// quotes the vega can underflow and the iteration stops at its current
    /// volatility rather than dividing by zero.
    pub fn newton_raphson(&self) -> ImpliedVolEstimate<T> {
        let start = Instant::now();
        let solver = NewtonRaphsonSolver::new(SolverConfig {
            tolerance: self.config.tolerance,
            max_iterations: self.config.open_max_iterations,
        });
        let estimate = solver.find_root(
            |sigma| self.objective(sigma),
            |sigma| self.model.vega(sigma),
            self.config.newton_seed,
        );
        self.finish(IvMethod::NewtonRaphson, estimate, start)
    }

    /// Secant iteration from the configured seed pair.
    ///
    /// Derivative-free: useful when the vega is unavailable or untrusted,
    /// at the cost of one extra objective evaluation per step.
    pub fn secant(&self) -> ImpliedVolEstimate<T> {
        let start = Instant::now();
        let solver = SecantSolver::new(SolverConfig {
            tolerance: self.config.tolerance,
            max_iterations: self.config.open_max_iterations,
        });
        let (older, newer) = self.config.secant_seeds;
        let estimate = solver.find_root(|sigma| self.objective(sigma), older, newer);
        self.finish(IvMethod::Secant, estimate, start)
    }

    /// Price residual at a trial volatility.
    #[inline]
    fn objective(&self, sigma: T) -> T {
        self.model.price(sigma) - self.market_price
    }

    fn finish(
        &self,
        method: IvMethod,
        estimate: RootEstimate<T>,
        start: Instant,
    ) -> ImpliedVolEstimate<T> {
        ImpliedVolEstimate {
            vol: estimate.root,
            method,
            iterations: estimate.iterations,
            elapsed: start.elapsed(),
            converged: estimate.converged,
            bracketed: estimate.bracketed,
            residual: estimate.residual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::{OptionContract, OptionKind};
    use std::time::Duration;

    fn classic_call() -> BlackScholes<f64> {
        let contract =
            OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.0, OptionKind::Call).unwrap();
        BlackScholes::new(contract)
    }

    // ========================================
    // Method Enum Tests
    // ========================================

    #[test]
    fn test_method_as_str_round_trips() {
        for method in IvMethod::ALL {
            assert_eq!(method.as_str().parse::<IvMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_method_display_matches_as_str() {
        assert_eq!(IvMethod::Bisection.to_string(), "bisection");
        assert_eq!(IvMethod::NewtonRaphson.to_string(), "newton");
        assert_eq!(IvMethod::Secant.to_string(), "secant");
    }

    #[test]
    fn test_method_from_str_accepts_aliases() {
        assert_eq!(
            "Newton-Raphson".parse::<IvMethod>().unwrap(),
            IvMethod::NewtonRaphson
        );
        assert_eq!(
            "newton_raphson".parse::<IvMethod>().unwrap(),
            IvMethod::NewtonRaphson
        );
        assert_eq!("BISECTION".parse::<IvMethod>().unwrap(), IvMethod::Bisection);
        assert_eq!("Secant".parse::<IvMethod>().unwrap(), IvMethod::Secant);
    }

    #[test]
    fn test_method_from_str_rejects_unknown() {
        let err = "brent".parse::<IvMethod>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("brent"));
        assert!(message.contains("bisection, newton, secant"));
    }

    #[test]
    fn test_method_all_ordering() {
        assert_eq!(
            IvMethod::ALL,
            [IvMethod::Bisection, IvMethod::NewtonRaphson, IvMethod::Secant]
        );
    }

    // ========================================
    // Round-Trip Recovery Tests
    // ========================================

    #[test]
    fn test_bisection_recovers_known_vol() {
        let model = classic_call();
        let market = model.price(0.2);
        let solver = ImpliedVolSolver::new(model, market);

        let estimate = solver.bisection();

        assert!(estimate.is_success());
        assert_eq!(estimate.method, IvMethod::Bisection);
        assert!(
            (estimate.vol - 0.2).abs() < 1e-5,
            "expected 0.2, got {}",
            estimate.vol
        );
        assert!(estimate.residual <= solver.config().tolerance);
    }

    #[test]
    fn test_newton_raphson_recovers_known_vol() {
        let model = classic_call();
        let market = model.price(0.35);
        let solver = ImpliedVolSolver::new(model, market);

        let estimate = solver.newton_raphson();

        assert!(estimate.is_success());
        assert!((estimate.vol - 0.35).abs() < 1e-5);
        // Healthy vega near the money: a handful of steps suffices.
        assert!(estimate.iterations < 10);
    }

    #[test]
    fn test_secant_recovers_known_vol() {
        let model = classic_call();
        let market = model.price(0.35);
        let solver = ImpliedVolSolver::new(model, market);

        let estimate = solver.secant();

        assert!(estimate.is_success());
        assert!((estimate.vol - 0.35).abs() < 1e-5);
    }

    #[test]
    fn test_methods_agree_on_the_same_quote() {
        let model = classic_call();
        let solver = ImpliedVolSolver::new(model, 10.4506);

        let bisection = solver.bisection();
        let newton = solver.newton_raphson();
        let secant = solver.secant();

        assert!(bisection.is_success());
        assert!(newton.is_success());
        assert!(secant.is_success());
        assert!((bisection.vol - newton.vol).abs() < 1e-4);
        assert!((bisection.vol - secant.vol).abs() < 1e-4);
    }

    #[test]
    fn test_put_quote_round_trips() {
        let contract =
            OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.0, OptionKind::Put).unwrap();
        let model = BlackScholes::new(contract);
        let market = model.price(0.25);
        let solver = ImpliedVolSolver::new(model, market);

        let estimate = solver.solve(IvMethod::Bisection);

        assert!(estimate.is_success());
        assert!((estimate.vol - 0.25).abs() < 1e-5);
    }

    // ========================================
    // Dispatch Tests
    // ========================================

    #[test]
    fn test_solve_tags_estimates_with_the_method() {
        let solver = ImpliedVolSolver::new(classic_call(), 10.4506);

        for method in IvMethod::ALL {
            let estimate = solver.solve(method);
            assert_eq!(estimate.method, method);
        }
    }

    #[test]
    fn test_solve_matches_direct_calls() {
        let solver = ImpliedVolSolver::new(classic_call(), 10.4506);

        assert_eq!(solver.solve(IvMethod::Bisection).vol, solver.bisection().vol);
        assert_eq!(
            solver.solve(IvMethod::NewtonRaphson).vol,
            solver.newton_raphson().vol
        );
        assert_eq!(solver.solve(IvMethod::Secant).vol, solver.secant().vol);
    }

    // ========================================
    // Degraded-Outcome Tests
    // ========================================

    #[test]
    fn test_quote_above_bracket_reports_unbracketed() {
        // A 100-strike call can never be worth 150: no volatility in the
        // bracket prices it, so the sign check fails at both endpoints.
        let solver = ImpliedVolSolver::new(classic_call(), 150.0);

        let estimate = solver.bisection();

        assert!(!estimate.bracketed);
        assert!(!estimate.is_success());
        assert_eq!(estimate.iterations, 0);
        assert_eq!(estimate.vol, solver.config().bracket.0);
    }

    #[test]
    fn test_underflowed_vega_stops_newton_at_the_seed() {
        // Deep out-of-the-money with days to expiry: the vega underflows to
        // zero at the seed and the iteration stops where it stands.
        let contract =
            OptionContract::new(300.0, 100.0, 0.02, 0.05, 0.0, OptionKind::Call).unwrap();
        let solver = ImpliedVolSolver::new(BlackScholes::new(contract), 5.0);

        let estimate = solver.newton_raphson();

        assert_eq!(estimate.vol, solver.config().newton_seed);
        assert_eq!(estimate.iterations, 0);
        assert!(!estimate.converged);
        assert!(estimate.bracketed);
    }

    // ========================================
    // Configuration and Diagnostics Tests
    // ========================================

    #[test]
    fn test_with_config_overrides_defaults() {
        let config = ImpliedVolConfig::default()
            .with_tolerance(1e-8)
            .with_newton_seed(0.5);
        let solver = ImpliedVolSolver::with_config(classic_call(), 10.4506, config);

        assert_eq!(solver.config().tolerance, 1e-8);
        assert_eq!(solver.config().newton_seed, 0.5);

        let estimate = solver.newton_raphson();
        assert!(estimate.is_success());
        assert!(estimate.residual <= 1e-8);
    }

    #[test]
    fn test_accessors_expose_model_and_quote() {
        let model = classic_call();
        let solver = ImpliedVolSolver::new(model, 10.4506);

        assert_eq!(solver.market_price(), 10.4506);
        assert_eq!(solver.model().contract().strike(), 100.0);
    }

    #[test]
    fn test_elapsed_time_is_recorded() {
        let solver = ImpliedVolSolver::new(classic_call(), 10.4506);

        let estimate = solver.bisection();

        assert!(estimate.elapsed > Duration::ZERO);
        assert!(estimate.elapsed < Duration::from_secs(5));
    }

    #[test]
    fn test_solver_with_f32() {
        let contract =
            OptionContract::new(100.0_f32, 100.0, 1.0, 0.05, 0.0, OptionKind::Call).unwrap();
        let model = BlackScholes::new(contract);
        let market = model.price(0.2_f32);
        // f32 cannot hit a 1e-6 price residual reliably; loosen it.
        let config = ImpliedVolConfig::<f32>::default().with_tolerance(1e-3);
        let solver = ImpliedVolSolver::with_config(model, market, config);

        let estimate = solver.bisection();

        assert!(estimate.converged);
        assert!((estimate.vol - 0.2).abs() < 1e-2);
    }

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        // The box keeps vega healthy: near-dated, far-from-the-money
        // contracts price flat in volatility and cannot round-trip.
        fn strike_strategy() -> impl Strategy<Value = f64> {
            80.0..120.0
        }

        fn moneyness_strategy() -> impl Strategy<Value = f64> {
            0.85..1.2
        }

        fn vol_strategy() -> impl Strategy<Value = f64> {
            0.15..1.2
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_bisection_round_trips_the_volatility(
                strike in strike_strategy(),
                moneyness in moneyness_strategy(),
                expiry in 0.25..2.0_f64,
                rate in 0.0..0.08_f64,
                dividend in 0.0..0.04_f64,
                vol in vol_strategy(),
                is_call in any::<bool>()
            ) {
                let kind = if is_call { OptionKind::Call } else { OptionKind::Put };
                let contract = OptionContract::new(
                    strike,
                    strike * moneyness,
                    expiry,
                    rate,
                    dividend,
                    kind,
                )
                .unwrap();
                let model = BlackScholes::new(contract);
                let market = model.price(vol);

                let estimate = ImpliedVolSolver::new(model, market).bisection();

                assert!(
                    estimate.is_success(),
                    "failed for σ = {}: {:?}",
                    vol,
                    estimate
                );
                assert!(
                    (estimate.vol - vol).abs() < 1e-3,
                    "recovered {} for σ = {}",
                    estimate.vol,
                    vol
                );
            }

            #[test]
            fn test_newton_round_trips_the_volatility(
                strike in strike_strategy(),
                moneyness in 0.9..1.1_f64,
                expiry in 0.5..2.0_f64,
                vol in 0.15..0.6_f64
            ) {
                // Narrower box than bisection: the low seed only converges
                // where the first step cannot overshoot the inflection.
                let contract = OptionContract::new(
                    strike,
                    strike * moneyness,
                    expiry,
                    0.03,
                    0.0,
                    OptionKind::Call,
                )
                .unwrap();
                let model = BlackScholes::new(contract);
                let market = model.price(vol);

                let estimate = ImpliedVolSolver::new(model, market).newton_raphson();

                assert!(
                    estimate.converged,
                    "failed for σ = {}: {:?}",
                    vol,
                    estimate
                );
                assert!((estimate.vol - vol).abs() < 1e-3);
            }
        }
    }
}
