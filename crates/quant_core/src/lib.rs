//! # quant_core: Numerical Foundation for Option Analytics
//!
//! ## Layer Role
//!
//! quant_core is the bottom layer of the workspace, providing the generic
//! numerical machinery that the pricing and implied-volatility layers are
//! built on:
//! - Scalar root finders with a best-effort outcome policy (`math::solvers`)
//! - One- and two-dimensional quadrature rules with convergence diagnostics
//!   (`math::quadrature`)
//! - Structured error types for string boundaries (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! This layer depends on no other workspace crate and keeps external
//! dependencies minimal:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured parse errors
//! - serde: Serialisation of outcome records (optional)
//!
//! ## Best-Effort Solver Policy
//!
//! The root finders here never panic and never return `Err` for numerical
//! trouble: an un-bracketed interval, a degenerate derivative, or an
//! exhausted iteration cap all degrade to the best estimate available,
//! reported through the flags on [`math::solvers::RootEstimate`]. Callers
//! inspect the flags instead of unwinding.
//!
//! ## Usage Examples
//!
//! ```rust
//! use quant_core::math::solvers::{BisectionSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 in [0, 2]
//! let solver = BisectionSolver::new(SolverConfig::new(1e-9, 200));
//! let estimate = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0);
//!
//! assert!(estimate.converged);
//! assert!((estimate.root - std::f64::consts::SQRT_2).abs() < 1e-8);
//! ```
//!
//! ```rust
//! use quant_core::math::quadrature::trapezoid;
//!
//! // ∫₀¹ x dx = 0.5
//! let integral = trapezoid(|x: f64| x, 0.0, 1.0, 100);
//! assert!((integral - 0.5).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
