//! Implied-volatility solve outcome.

use std::time::Duration;

use num_traits::Float;

use super::IvMethod;

/// Outcome of a single implied-volatility solve.
///
/// Solving is best-effort: the estimate always carries a volatility
/// (the best iterate found) together with the diagnostics a caller needs
/// to judge it. Check [`is_success`](Self::is_success) before treating
/// the volatility as an answer rather than a starting point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpliedVolEstimate<T: Float> {
    /// The estimated volatility.
    pub vol: T,
    /// Which solver produced the estimate.
    pub method: IvMethod,
    /// Iterations consumed.
    pub iterations: usize,
    /// Wall-clock time spent in the solve.
    pub elapsed: Duration,
    /// Whether the residual met the configured tolerance.
    pub converged: bool,
    /// Whether the market price was bracketed by the search interval.
    ///
    /// Always `true` for the open methods; bisection reports `false` when
    /// the quote lies outside the model prices at the bracket endpoints.
    pub bracketed: bool,
    /// Absolute price residual `|price(vol) - market|` at the estimate.
    pub residual: T,
}

impl<T: Float> ImpliedVolEstimate<T> {
    /// Returns `true` when the estimate both converged and was bracketed.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.converged && self.bracketed
    }

    /// Elapsed solve time in fractional milliseconds.
    #[inline]
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(converged: bool, bracketed: bool) -> ImpliedVolEstimate<f64> {
        ImpliedVolEstimate {
            vol: 0.42,
            method: IvMethod::Bisection,
            iterations: 21,
            elapsed: Duration::from_micros(250),
            converged,
            bracketed,
            residual: 5e-7,
        }
    }

    #[test]
    fn test_is_success_requires_both_flags() {
        assert!(sample(true, true).is_success());
        assert!(!sample(true, false).is_success());
        assert!(!sample(false, true).is_success());
        assert!(!sample(false, false).is_success());
    }

    #[test]
    fn test_elapsed_millis_scales_duration() {
        let estimate = sample(true, true);
        assert!((estimate.elapsed_millis() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_estimate_is_copy() {
        let estimate = sample(true, true);
        let copy = estimate;
        assert_eq!(copy, estimate);
    }
}
