//! Implied-volatility solving.
//!
//! Inverts the Black-Scholes price for the volatility that reproduces an
//! observed market quote. Three root-finding methods are wired up, sharing
//! one domain configuration:
//!
//! - **Bisection** over a volatility bracket: robust, the default.
//! - **Newton-Raphson** seeded near typical equity vols, using the analytic
//!   vega: fastest when it works.
//! - **Secant**: derivative-free fallback between the two.
//!
//! Every solve returns an [`ImpliedVolEstimate`] carrying the volatility,
//! iteration count, wall-clock time and convergence diagnostics; nothing
//! here panics or errors on a bad quote.
//!
//! # Examples
//!
//! ```
//! use quant_models::analytical::BlackScholes;
//! use quant_models::implied::{ImpliedVolSolver, IvMethod};
//! use quant_models::instruments::{OptionContract, OptionKind};
//!
//! let contract = OptionContract::new(100.0_f64, 100.0, 1.0, 0.05, 0.0, OptionKind::Call)?;
//! let model = BlackScholes::new(contract);
//!
//! // Price at a known volatility, then recover it from the price.
//! let market = model.price(0.2);
//! let solver = ImpliedVolSolver::new(model, market);
//!
//! for method in IvMethod::ALL {
//!     let estimate = solver.solve(method);
//!     assert!(estimate.is_success());
//!     assert!((estimate.vol - 0.2).abs() < 1e-4);
//! }
//! # Ok::<(), quant_models::instruments::ModelError>(())
//! ```

mod config;
mod estimate;
mod solver;

pub use config::{ImpliedVolConfig, ALT_NEWTON_SEED};
pub use estimate::ImpliedVolEstimate;
pub use solver::{ImpliedVolSolver, IvMethod};
