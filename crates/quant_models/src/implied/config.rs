//! Implied-volatility solver configuration.

use num_traits::Float;

/// Alternative Newton seed for far-from-the-money quotes.
///
/// The default seed of `0.2` sits in the bulk of observed equity implied
/// volatilities; seeding at `2.0` instead starts the iteration above almost
/// every realistic answer, which can help when the low seed lands in a
/// flat-vega region.
pub const ALT_NEWTON_SEED: f64 = 2.0;

/// Domain defaults and knobs for the implied-volatility solvers.
///
/// The generic root finders in `quant_core` know nothing about
/// volatilities; this configuration binds them to the volatility domain:
/// a search bracket covering `0.01%`–`300%`, a residual tolerance on the
/// price scale, and per-method iteration caps (the bracketing method is
/// cheap per step and gets a larger cap than the derivative-based ones).
///
/// # Examples
/// ```
/// use quant_models::implied::ImpliedVolConfig;
///
/// let config = ImpliedVolConfig::<f64>::default();
/// assert_eq!(config.bracket, (1e-4, 3.0));
///
/// let loose = ImpliedVolConfig::<f64>::default().with_tolerance(1e-4);
/// assert_eq!(loose.tolerance, 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpliedVolConfig<T: Float> {
    /// Absolute price-residual tolerance.
    pub tolerance: T,
    /// Bisection search bracket `(low, high)` in volatility terms.
    pub bracket: (T, T),
    /// Iteration cap for bisection.
    pub bisection_max_iterations: usize,
    /// Iteration cap for the open methods (Newton-Raphson, secant).
    pub open_max_iterations: usize,
    /// Newton-Raphson starting volatility.
    pub newton_seed: T,
    /// Secant seed pair `(older, newer)`.
    pub secant_seeds: (T, T),
}

impl<T: Float> Default for ImpliedVolConfig<T> {
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-6).unwrap(),
            bracket: (T::from(1e-4).unwrap(), T::from(3.0).unwrap()),
            bisection_max_iterations: 1000,
            open_max_iterations: 100,
            newton_seed: T::from(0.2).unwrap(),
            secant_seeds: (T::from(2.0).unwrap(), T::from(3.0).unwrap()),
        }
    }
}

impl<T: Float> ImpliedVolConfig<T> {
    /// Returns a copy with the residual tolerance replaced.
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns a copy with the bisection bracket replaced.
    pub fn with_bracket(mut self, low: T, high: T) -> Self {
        self.bracket = (low, high);
        self
    }

    /// Returns a copy with the Newton-Raphson seed replaced.
    ///
    /// See [`ALT_NEWTON_SEED`] for the conventional high alternative.
    pub fn with_newton_seed(mut self, seed: T) -> Self {
        self.newton_seed = seed;
        self
    }

    /// Returns a copy with the secant seed pair replaced.
    pub fn with_secant_seeds(mut self, older: T, newer: T) -> Self {
        self.secant_seeds = (older, newer);
        self
    }

    /// Returns a copy with both iteration caps replaced.
    pub fn with_iteration_caps(mut self, bisection: usize, open: usize) -> Self {
        self.bisection_max_iterations = bisection;
        self.open_max_iterations = open;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ImpliedVolConfig::<f64>::default();
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.bracket, (1e-4, 3.0));
        assert_eq!(config.bisection_max_iterations, 1000);
        assert_eq!(config.open_max_iterations, 100);
        assert_eq!(config.newton_seed, 0.2);
        assert_eq!(config.secant_seeds, (2.0, 3.0));
    }

    #[test]
    fn test_builders_replace_single_fields() {
        let config = ImpliedVolConfig::<f64>::default()
            .with_tolerance(1e-8)
            .with_bracket(0.01, 5.0)
            .with_newton_seed(ALT_NEWTON_SEED)
            .with_secant_seeds(1.0, 1.5)
            .with_iteration_caps(500, 50);

        assert_eq!(config.tolerance, 1e-8);
        assert_eq!(config.bracket, (0.01, 5.0));
        assert_eq!(config.newton_seed, 2.0);
        assert_eq!(config.secant_seeds, (1.0, 1.5));
        assert_eq!(config.bisection_max_iterations, 500);
        assert_eq!(config.open_max_iterations, 50);
    }

    #[test]
    fn test_f32_compatibility() {
        let config = ImpliedVolConfig::<f32>::default();
        assert!((config.newton_seed - 0.2_f32).abs() < 1e-7);
    }
}
