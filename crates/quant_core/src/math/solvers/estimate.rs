//! Root-finding outcome records.

use num_traits::Float;

/// Outcome of a root-finding run.
///
/// Solvers in this module never fail: numerical trouble degrades to the best
/// estimate available, and this record carries both the estimate and the
/// diagnostics a caller needs to judge it.
///
/// # Fields at a glance
///
/// - `root` is the returned estimate, valid in every case.
/// - `converged` is recomputed from the residual at `root`, so it always
///   describes the value actually handed back (even after a degraded exit).
/// - `bracketed` is `false` only when a bracketing method found same-signed
///   residuals at both endpoints; open methods report `true`.
///
/// # Example
///
/// ```
/// use quant_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::new(1e-9, 200));
/// let estimate = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0);
///
/// assert!(estimate.is_success());
/// assert!(estimate.residual < 1e-9);
/// assert!(estimate.iterations > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootEstimate<T: Float> {
    /// Best root estimate.
    pub root: T,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether `|f(root)| <= tolerance`.
    pub converged: bool,
    /// Whether the search interval enclosed a sign change.
    ///
    /// Only bisection can report `false`; Newton and secant perform no
    /// bracket check and always report `true`.
    pub bracketed: bool,
    /// Absolute residual `|f(root)|` at the returned estimate.
    pub residual: T,
}

impl<T: Float> RootEstimate<T> {
    /// Assemble an estimate, deriving `converged` from the residual.
    pub(crate) fn from_residual(
        root: T,
        iterations: usize,
        bracketed: bool,
        residual: T,
        tolerance: T,
    ) -> Self {
        Self {
            root,
            iterations,
            converged: residual <= tolerance,
            bracketed,
            residual,
        }
    }

    /// Whether the run both bracketed its root (where applicable) and met
    /// tolerance.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.converged && self.bracketed
    }
}
