//! Bisection root-finding solver.

use super::{RootEstimate, SolverConfig};
use num_traits::Float;

/// Bisection root finder.
///
/// Repeatedly halves a bracketing interval `[a, b]` until the residual at the
/// midpoint meets tolerance or the iteration cap is reached. Once a sign
/// change is enclosed the method cannot diverge, which makes it the robust
/// default for implied-volatility solving.
///
/// # Bracket policy
///
/// The interval update assumes the objective is increasing across the
/// bracket (an option price is increasing in volatility): a negative
/// midpoint residual moves the lower endpoint up, a positive one moves the
/// upper endpoint down.
///
/// If `f(a)` and `f(b)` have the same sign the root is not enclosed. The
/// solver does not iterate in that case; it returns the lower endpoint
/// clamped into `[tolerance, b]` with `bracketed` set to `false`, leaving
/// the caller to decide whether the degraded estimate is usable.
///
/// The final estimate is always clamped into `[tolerance, b]`.
///
/// # Example
///
/// ```
/// use quant_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::new(1e-9, 200));
///
/// // Solve x³ - x - 2 = 0 in [1, 2]
/// let f = |x: f64| x * x * x - x - 2.0;
/// let estimate = solver.find_root(f, 1.0, 2.0);
///
/// assert!(estimate.is_success());
/// assert!(f(estimate.root).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use quant_core::math::solvers::{BisectionSolver, SolverConfig};
    ///
    /// let solver: BisectionSolver<f64> = BisectionSolver::new(SolverConfig::default());
    /// ```
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` in the bracket `[a, b]`.
    ///
    /// Callers supply `a < b`. The objective must be increasing across the
    /// bracket for the interval update to make progress towards the root.
    ///
    /// # Arguments
    ///
    /// * `f` - Objective whose root is sought
    /// * `a` - Left bracket endpoint
    /// * `b` - Right bracket endpoint
    ///
    /// # Returns
    ///
    /// A [`RootEstimate`] in every case:
    /// - converged midpoint when the bracket holds a sign change and
    ///   tolerance is met;
    /// - the last midpoint with `converged == false` when the iteration cap
    ///   is exhausted;
    /// - the clamped lower endpoint with `bracketed == false` when
    ///   `f(a)·f(b) > 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use quant_core::math::solvers::{BisectionSolver, SolverConfig};
    ///
    /// let solver = BisectionSolver::new(SolverConfig::new(1e-9, 200));
    /// let estimate = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0);
    ///
    /// assert!((estimate.root - std::f64::consts::SQRT_2).abs() < 1e-8);
    /// ```
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> RootEstimate<T>
    where
        F: Fn(T) -> T,
    {
        let two = T::from(2.0).unwrap();
        let tolerance = self.config.tolerance;

        let mut a = a;
        let mut b = b;

        let fa = f(a);
        let fb = f(b);

        if fa * fb > T::zero() {
            // Root not enclosed: hand back the clamped lower endpoint.
            let root = clamp_into(a, tolerance, b);
            let residual = f(root).abs();
            return RootEstimate::from_residual(root, 0, false, residual, tolerance);
        }

        let mut c = (a + b) / two;
        let mut residual = f(c);
        let mut iterations = 0;

        while residual.abs() > tolerance && iterations < self.config.max_iterations {
            if residual < T::zero() {
                a = c;
            } else {
                b = c;
            }
            c = (a + b) / two;
            residual = f(c);
            iterations += 1;
        }

        let root = clamp_into(c, tolerance, b);
        // The clamp can move the point, so the reported residual is taken at
        // the value actually returned.
        let final_residual = if root == c { residual.abs() } else { f(root).abs() };

        RootEstimate::from_residual(root, iterations, true, final_residual, tolerance)
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

/// Clamp `x` into `[lo, hi]`.
fn clamp_into<T: Float>(x: T, lo: T, hi: T) -> T {
    lo.max(x.min(hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Basic Functionality Tests
    // ========================================

    #[test]
    fn test_find_sqrt_2() {
        let solver = BisectionSolver::new(SolverConfig::new(1e-9, 200));

        let f = |x: f64| x * x - 2.0;
        let estimate = solver.find_root(f, 0.0, 2.0);

        assert!(estimate.is_success());
        assert!(
            (estimate.root - std::f64::consts::SQRT_2).abs() < 1e-8,
            "Expected √2 ≈ {}, got {}",
            std::f64::consts::SQRT_2,
            estimate.root
        );
    }

    #[test]
    fn test_find_cubic_root() {
        let solver = BisectionSolver::new(SolverConfig::new(1e-9, 200));

        // x³ - x - 2 = 0 has its real root near 1.5214
        let f = |x: f64| x * x * x - x - 2.0;
        let estimate = solver.find_root(f, 1.0, 2.0);

        assert!(estimate.converged);
        assert!(f(estimate.root).abs() < 1e-9);
    }

    #[test]
    fn test_find_linear_root() {
        let solver = BisectionSolver::with_defaults();

        let estimate = solver.find_root(|x: f64| x - 1.0, 0.0, 2.0);

        assert!(estimate.is_success());
        assert!((estimate.root - 1.0).abs() < 1e-6);
        // The first midpoint already sits on the root.
        assert_eq!(estimate.iterations, 0);
    }

    #[test]
    fn test_residual_matches_returned_root() {
        let solver = BisectionSolver::new(SolverConfig::new(1e-9, 200));

        let f = |x: f64| x.exp() - 2.0;
        let estimate = solver.find_root(f, 0.0, 1.0);

        assert!((estimate.residual - f(estimate.root).abs()).abs() < 1e-15);
    }

    // ========================================
    // Degraded-Outcome Tests
    // ========================================

    #[test]
    fn test_unbracketed_returns_clamped_endpoint() {
        let solver = BisectionSolver::new(SolverConfig::new(1e-6, 1000));

        // f > 0 on the whole interval: no sign change.
        let f = |x: f64| x * x + 1.0;
        let estimate = solver.find_root(f, 0.5, 2.0);

        assert!(!estimate.bracketed);
        assert!(!estimate.is_success());
        assert_eq!(estimate.iterations, 0);
        // Lower endpoint clamped into [tolerance, b].
        assert!((estimate.root - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_unbracketed_endpoint_below_tolerance_clamps_up() {
        let solver = BisectionSolver::new(SolverConfig::new(1e-2, 100));

        let f = |x: f64| x * x + 1.0;
        let estimate = solver.find_root(f, 1e-4, 3.0);

        // a = 1e-4 < tolerance = 1e-2, so the clamp lifts it.
        assert!(!estimate.bracketed);
        assert!((estimate.root - 1e-2).abs() < 1e-12);
    }

    #[test]
    fn test_iteration_cap_reports_unconverged() {
        // Tolerance no double can satisfy on a sloped function.
        let solver = BisectionSolver::new(SolverConfig::new(1e-300, 5));

        let f = |x: f64| x - std::f64::consts::FRAC_1_SQRT_2;
        let estimate = solver.find_root(f, 0.0, 1.0);

        assert!(!estimate.converged);
        assert!(estimate.bracketed);
        assert_eq!(estimate.iterations, 5);
    }

    #[test]
    fn test_root_never_exceeds_upper_endpoint() {
        let solver = BisectionSolver::with_defaults();

        let estimate = solver.find_root(|x: f64| x - 0.9999, 0.0, 1.0);

        assert!(estimate.root <= 1.0);
        assert!(estimate.root >= solver.config().tolerance);
    }

    // ========================================
    // Configuration Tests
    // ========================================

    #[test]
    fn test_with_defaults() {
        let solver: BisectionSolver<f64> = BisectionSolver::with_defaults();
        assert_eq!(solver.config().max_iterations, 100);
    }

    #[test]
    fn test_config_accessor() {
        let config = SolverConfig::new(1e-8, 50);
        let solver = BisectionSolver::new(config);

        assert!((solver.config().tolerance - 1e-8).abs() < 1e-15);
        assert_eq!(solver.config().max_iterations, 50);
    }

    #[test]
    fn test_clone() {
        let solver: BisectionSolver<f64> = BisectionSolver::with_defaults();
        let cloned = solver.clone();

        assert_eq!(
            solver.config().max_iterations,
            cloned.config().max_iterations
        );
    }

    #[test]
    fn test_with_f32() {
        let solver: BisectionSolver<f32> = BisectionSolver::new(SolverConfig::new(1e-5, 100));

        let estimate = solver.find_root(|x: f32| x * x - 2.0, 0.0_f32, 2.0_f32);
        assert!((estimate.root - std::f32::consts::SQRT_2).abs() < 1e-4);
    }

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            // f(x) = (x - r) + (x - r)³ has unit slope at the root, so the
            // residual tolerance transfers to the root itself.
            #[test]
            fn test_recovers_interior_root(
                lo in 0.5..1.0_f64,
                hi in 2.0..4.0_f64,
                t in 0.1..0.9_f64
            ) {
                let r = lo + t * (hi - lo);
                let f = |x: f64| (x - r) + (x - r).powi(3);

                let solver = BisectionSolver::new(SolverConfig::new(1e-9, 200));
                let estimate = solver.find_root(f, lo, hi);

                assert!(estimate.is_success());
                assert!(
                    (estimate.root - r).abs() < 1e-8,
                    "expected root {}, got {}",
                    r,
                    estimate.root
                );
            }

            #[test]
            fn test_root_stays_inside_the_clamp_interval(
                lo in 0.5..1.0_f64,
                hi in 2.0..4.0_f64,
                t in 0.0..1.0_f64
            ) {
                let r = lo + t * (hi - lo);
                let solver = BisectionSolver::with_defaults();
                let estimate = solver.find_root(|x: f64| x - r, lo, hi);

                assert!(estimate.root >= solver.config().tolerance);
                assert!(estimate.root <= hi);
            }
        }
    }
}
