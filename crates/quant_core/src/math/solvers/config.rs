//! Solver configuration types.

use num_traits::Float;

/// Configuration shared by all root-finding solvers.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for the tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use quant_core::math::solvers::SolverConfig;
///
/// // Default configuration
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.tolerance <= 1e-6);
/// assert!(config.max_iterations >= 100);
///
/// // Custom configuration
/// let custom = SolverConfig {
///     tolerance: 1e-9,
///     max_iterations: 400,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance on the residual.
    ///
    /// The solver reports convergence when `|f(x)| <= tolerance` at the
    /// returned root.
    pub tolerance: T,

    /// Iteration cap.
    ///
    /// Solvers stop after this many iterations and return the last iterate
    /// with `converged` set from its residual.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Create a default configuration.
    ///
    /// Default values:
    /// - `tolerance`: 1e-6
    /// - `max_iterations`: 100
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-6).unwrap(),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Arguments
    ///
    /// * `tolerance` - Convergence tolerance (must be positive)
    /// * `max_iterations` - Iteration cap (must be > 0)
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use quant_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-6, 1000);
    /// assert_eq!(config.max_iterations, 1000);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Create a configuration with high precision settings.
    ///
    /// Uses tighter tolerance (1e-9) and more iterations (500).
    pub fn high_precision() -> Self {
        Self {
            tolerance: T::from(1e-9).unwrap(),
            max_iterations: 500,
        }
    }

    /// Create a configuration optimised for fast convergence.
    ///
    /// Uses relaxed tolerance (1e-4) and fewer iterations (25).
    pub fn fast() -> Self {
        Self {
            tolerance: T::from(1e-4).unwrap(),
            max_iterations: 25,
        }
    }
}
