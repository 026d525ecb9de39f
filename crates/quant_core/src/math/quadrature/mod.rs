//! Numerical integration rules and refinement diagnostics.
//!
//! Two composite one-dimensional rules ([`trapezoid`], [`simpson`]), a
//! nine-point-stencil rule over rectangles ([`trapezoid_2d`]), and the
//! diagnostics built on top of them: [`truncation_error`] against a known
//! reference value and [`convergence_iterations`] counting grid doublings
//! until successive approximations agree.
//!
//! Rule selection travels as the [`QuadratureMethod`] enum; text only enters
//! through its `FromStr` at CLI and configuration boundaries.
//!
//! All routines are generic over [`num_traits::Float`] and take the
//! integrand as a closure, so the same rules serve `f32` and `f64` and any
//! integrand without allocation.
//!
//! # Examples
//!
//! ```
//! use quant_core::math::quadrature::{simpson, trapezoid};
//!
//! // ∫₀^π sin x dx = 2
//! let t = trapezoid(|x: f64| x.sin(), 0.0, std::f64::consts::PI, 1000);
//! let s = simpson(|x: f64| x.sin(), 0.0, std::f64::consts::PI, 1000);
//!
//! assert!((t - 2.0).abs() < 1e-5);
//! assert!((s - 2.0).abs() < 1e-10);
//! ```

mod convergence;
mod method;
mod rules;

pub use convergence::{
    convergence_iterations, truncation_error, ConvergenceReport, DEFAULT_CONVERGENCE_TOLERANCE,
    DEFAULT_MAX_DOUBLINGS,
};
pub use method::QuadratureMethod;
pub use rules::{simpson, trapezoid, trapezoid_2d};
