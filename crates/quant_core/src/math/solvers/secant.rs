//! Secant root-finding solver.

use super::{RootEstimate, SolverConfig};
use num_traits::Float;

/// Secant root finder.
///
/// Replaces the derivative in Newton's update with a finite-difference slope
/// through the two most recent iterates:
///
/// ```text
/// x₂ = x₁ − f(x₁) · (x₁ − x₀) / (f(x₁) − f(x₀))
/// ```
///
/// Useful when the derivative is unavailable or expensive; converges
/// superlinearly (order ≈ 1.618) near a simple root. Like
/// [`NewtonRaphsonSolver`](super::NewtonRaphsonSolver) it performs no
/// bracketing, so the iterates may wander before settling.
///
/// # Flat-secant guard
///
/// When the two function values draw within `tolerance` of each other the
/// secant slope degenerates and the update would divide by nearly zero. The
/// solver stops and returns the newer iterate with `converged` reflecting
/// its residual.
///
/// # Example
///
/// ```
/// use quant_core::math::solvers::{SecantSolver, SolverConfig};
///
/// let solver = SecantSolver::new(SolverConfig::default());
///
/// // Solve x² - 2 = 0 from the pair (1, 2)
/// let estimate = solver.find_root(|x: f64| x * x - 2.0, 1.0, 2.0);
///
/// assert!(estimate.converged);
/// assert!((estimate.root - std::f64::consts::SQRT_2).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct SecantSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> SecantSolver<T> {
    /// Create a new secant solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` from the seed pair `(x0, x1)`.
    ///
    /// # Arguments
    ///
    /// * `f` - Objective whose root is sought
    /// * `x0` - Older seed
    /// * `x1` - Newer seed
    ///
    /// # Returns
    ///
    /// A [`RootEstimate`] in every case: the converged iterate, the iterate
    /// at which the flat-secant guard fired, or the last iterate once the
    /// cap is exhausted. `bracketed` is always `true` (no bracket is
    /// checked).
    pub fn find_root<F>(&self, f: F, x0: T, x1: T) -> RootEstimate<T>
    where
        F: Fn(T) -> T,
    {
        let tolerance = self.config.tolerance;
        let mut x0 = x0;
        let mut x1 = x1;
        let mut iterations = 0;

        for _ in 0..self.config.max_iterations {
            let f0 = f(x0);
            let f1 = f(x1);

            if f1.abs() < tolerance {
                return RootEstimate::from_residual(x1, iterations, true, f1.abs(), tolerance);
            }

            if (f1 - f0).abs() < tolerance {
                // Flat secant: the update would divide by nearly zero.
                return RootEstimate::from_residual(x1, iterations, true, f1.abs(), tolerance);
            }

            let x2 = x1 - f1 * (x1 - x0) / (f1 - f0);
            x0 = x1;
            x1 = x2;
            iterations += 1;
        }

        let residual = f(x1).abs();
        RootEstimate::from_residual(x1, iterations, true, residual, tolerance)
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
