//! Option Greeks: closed-form and finite-difference.
//!
//! Two independent estimators for the same sensitivities:
//!
//! - [`GreeksBundle::analytic`] evaluates the Black-Scholes closed forms.
//! - [`FiniteDifference`] re-prices under symmetric bumps.
//!
//! [`GreeksReport`] runs both and measures their gap, which is the
//! cross-check this module exists for: a healthy zero-dividend contract
//! should agree to within the bump truncation error.
//!
//! # Examples
//!
//! ```
//! use quant_models::analytical::BlackScholes;
//! use quant_models::greeks::{FiniteDifference, GreeksReport};
//! use quant_models::instruments::{OptionContract, OptionKind};
//!
//! let contract = OptionContract::new(95.0, 100.0, 0.25, 0.04, 0.0, OptionKind::Call)?;
//! let model = BlackScholes::new(contract);
//!
//! let report = GreeksReport::evaluate(&model, 0.3, &FiniteDifference::default());
//! assert!(report.max_divergence() < 1e-2);
//! # Ok::<(), quant_models::instruments::ModelError>(())
//! ```

mod bundle;
mod finite_difference;
mod report;

pub use bundle::GreeksBundle;
pub use finite_difference::{FiniteDifference, DEFAULT_FD_STEP};
pub use report::GreeksReport;
