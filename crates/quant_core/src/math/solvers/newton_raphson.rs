//! Newton-Raphson root-finding solver.

use super::{RootEstimate, SolverConfig};
use num_traits::Float;

/// Newton-Raphson root finder.
///
/// Iterates `x ← x − f(x)/f′(x)` from a single starting point. Converges
/// quadratically near a simple root but performs no bracketing: a poorly
/// chosen seed can walk the iterate to values far outside any meaningful
/// range. That behaviour is accepted and documented rather than guarded,
/// matching the method's role as the fast-but-fragile alternative to
/// [`BisectionSolver`](super::BisectionSolver).
///
/// # Derivative guard
///
/// The update halts as soon as the supplied derivative is not strictly
/// positive. The guard suits objectives that are increasing wherever the
/// solver should roam (an option price is increasing in volatility, with
/// vega as its derivative) and prevents a division that would fling the
/// iterate to infinity or flip its sign uncontrollably. The current iterate
/// is returned with `converged` reflecting its residual.
///
/// # Example
///
/// ```
/// use quant_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
///
/// // Solve x² - 2 = 0 starting from 1.0
/// let estimate = solver.find_root(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, 1.0);
///
/// assert!(estimate.converged);
/// assert!((estimate.root - std::f64::consts::SQRT_2).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` starting from `x0`.
    ///
    /// # Arguments
    ///
    /// * `f` - Objective whose root is sought
    /// * `f_prime` - Derivative of the objective
    /// * `x0` - Starting point
    ///
    /// # Returns
    ///
    /// A [`RootEstimate`] in every case: the converged iterate, the iterate
    /// at which the derivative guard fired, or the last iterate once the cap
    /// is exhausted. `bracketed` is always `true` (no bracket is checked).
    ///
    /// # Example
    ///
    /// ```
    /// use quant_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
    ///
    /// // Solve e^x - 2 = 0 (find ln 2)
    /// let estimate = solver.find_root(|x: f64| x.exp() - 2.0, |x: f64| x.exp(), 1.0);
    /// assert!((estimate.root - 2.0_f64.ln()).abs() < 1e-6);
    /// ```
    pub fn find_root<F, G>(&self, f: F, f_prime: G, x0: T) -> RootEstimate<T>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let tolerance = self.config.tolerance;
        let mut x = x0;
        let mut iterations = 0;

        for _ in 0..self.config.max_iterations {
            let fx = f(x);

            if fx.abs() < tolerance {
                return RootEstimate::from_residual(x, iterations, true, fx.abs(), tolerance);
            }

            let dfx = f_prime(x);
            if dfx <= T::zero() {
                // Degenerate derivative: stop at the current iterate.
                return RootEstimate::from_residual(x, iterations, true, fx.abs(), tolerance);
            }

            x = x - fx / dfx;
            iterations += 1;
        }

        let residual = f(x).abs();
        RootEstimate::from_residual(x, iterations, true, residual, tolerance)
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
