//! Refinement diagnostics for the quadrature rules.

use super::QuadratureMethod;
use num_traits::Float;

/// Default tolerance for the successive-refinement convergence check.
pub const DEFAULT_CONVERGENCE_TOLERANCE: f64 = 1e-4;

/// Default cap on grid doublings in [`convergence_iterations`].
pub const DEFAULT_MAX_DOUBLINGS: usize = 25;

/// Interval count the refinement loop starts from.
const INITIAL_INTERVALS: usize = 10;

/// Outcome of a successive-refinement convergence run.
///
/// Produced by [`convergence_iterations`]. When `converged` is `false` the
/// doubling cap was exhausted and `value` holds the finest approximation
/// reached; callers decide whether that is acceptable.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceReport<T: Float> {
    /// Approximation at the finest grid evaluated.
    pub value: T,
    /// Number of grid doublings performed, including the one that satisfied
    /// the tolerance.
    pub doublings: usize,
    /// Whether successive approximations drew within tolerance before the
    /// cap.
    pub converged: bool,
}

/// Absolute deviation of a quadrature approximation from a reference value.
///
/// # Arguments
///
/// * `method` - Quadrature rule to apply
/// * `f` - Integrand
/// * `a` - Lower bound
/// * `b` - Upper bound
/// * `n` - Number of subintervals
/// * `reference` - Known value of the integral
///
/// # Panics
///
/// Panics if `n` is zero.
///
/// # Example
///
/// ```
/// use quant_core::math::quadrature::{truncation_error, QuadratureMethod};
///
/// // ∫₀^π sin x dx = 2
/// let err = truncation_error(
///     QuadratureMethod::Simpson,
///     |x: f64| x.sin(),
///     0.0,
///     std::f64::consts::PI,
///     100,
///     2.0,
/// );
/// assert!(err < 1e-8);
/// ```
pub fn truncation_error<T, F>(
    method: QuadratureMethod,
    f: F,
    a: T,
    b: T,
    n: usize,
    reference: T,
) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    (method.integrate(f, a, b, n) - reference).abs()
}

/// Count the grid doublings a rule needs before successive approximations
/// agree.
///
/// Starts from `10` subintervals and doubles until two consecutive
/// approximations differ by less than `tolerance`, or `max_doublings`
/// refinements have been performed. The doubling that first satisfies the
/// tolerance is included in the count.
///
/// Each doubling doubles the work of the previous one, so a generous cap is
/// exponentially expensive when the rule is not converging;
/// [`DEFAULT_MAX_DOUBLINGS`] already corresponds to over 300 million
/// subintervals.
///
/// # Arguments
///
/// * `method` - Quadrature rule to refine
/// * `f` - Integrand
/// * `a` - Lower bound
/// * `b` - Upper bound
/// * `tolerance` - Successive-difference threshold
///   ([`DEFAULT_CONVERGENCE_TOLERANCE`] when in doubt)
/// * `max_doublings` - Refinement cap ([`DEFAULT_MAX_DOUBLINGS`] when in
///   doubt)
///
/// # Example
///
/// ```
/// use quant_core::math::quadrature::{convergence_iterations, QuadratureMethod};
///
/// let report = convergence_iterations(
///     QuadratureMethod::Simpson,
///     |x: f64| x.exp(),
///     0.0,
///     1.0,
///     1e-4,
///     25,
/// );
/// assert!(report.converged);
/// assert!((report.value - (1.0_f64.exp() - 1.0)).abs() < 1e-4);
/// ```
pub fn convergence_iterations<T, F>(
    method: QuadratureMethod,
    f: F,
    a: T,
    b: T,
    tolerance: T,
    max_doublings: usize,
) -> ConvergenceReport<T>
where
    T: Float,
    F: Fn(T) -> T,
{
    let mut n = INITIAL_INTERVALS;
    let mut previous = method.integrate(&f, a, b, n);
    let mut doublings = 0;

    while doublings < max_doublings {
        n *= 2;
        let current = method.integrate(&f, a, b, n);
        doublings += 1;

        if (current - previous).abs() < tolerance {
            return ConvergenceReport {
                value: current,
                doublings,
                converged: true,
            };
        }
        previous = current;
    }

    ConvergenceReport {
        value: previous,
        doublings,
        converged: false,
    }
}
