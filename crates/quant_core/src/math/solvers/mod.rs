//! Scalar root-finding solvers with a best-effort outcome policy.
//!
//! This module provides the three root-finding algorithms used to invert a
//! pricing model against an observed market price, expressed generically over
//! caller-supplied closures:
//!
//! - [`BisectionSolver`]: Bracketing method, guaranteed progress once the
//!   root is enclosed; the robust default.
//! - [`NewtonRaphsonSolver`]: Fast quadratic convergence using an explicit
//!   derivative; no bracketing safeguard.
//! - [`SecantSolver`]: Derivative-free two-point method; no bracketing
//!   safeguard.
//!
//! ## Outcome policy
//!
//! Every solver returns a [`RootEstimate`] rather than a `Result`. Numerical
//! trouble (an un-bracketed interval, a non-positive derivative, an
//! exhausted iteration cap) degrades to the best value available, with the
//! `converged` and `bracketed` flags describing what happened. There is no
//! panicking path and no error path.
//!
//! ## Configuration
//!
//! All solvers take a [`SolverConfig`]:
//! - `tolerance`: Convergence tolerance on `|f(x)|` (default: 1e-6)
//! - `max_iterations`: Iteration cap (default: 100)
//!
//! ## Examples
//!
//! ```
//! use quant_core::math::solvers::{BisectionSolver, NewtonRaphsonSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 two ways.
//! let f = |x: f64| x * x - 2.0;
//! let f_prime = |x: f64| 2.0 * x;
//!
//! let bisection = BisectionSolver::with_defaults().find_root(f, 0.0, 2.0);
//! let newton = NewtonRaphsonSolver::with_defaults().find_root(f, f_prime, 1.0);
//!
//! assert!(bisection.converged);
//! assert!(newton.converged);
//! assert!((bisection.root - newton.root).abs() < 1e-5);
//! ```

mod bisection;
mod config;
mod estimate;
mod newton_raphson;
mod secant;

// Re-export public types at module level
pub use bisection::BisectionSolver;
pub use config::SolverConfig;
pub use estimate::RootEstimate;
pub use newton_raphson::NewtonRaphsonSolver;
pub use secant::SecantSolver;
