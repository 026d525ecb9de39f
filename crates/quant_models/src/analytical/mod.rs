//! Closed-form analytics.
//!
//! This module provides the Black-Scholes pricing model and the
//! standard-normal distribution helpers it is built on.
//!
//! # Examples
//!
//! ```
//! use quant_models::analytical::BlackScholes;
//! use quant_models::instruments::{OptionContract, OptionKind};
//!
//! let contract =
//!     OptionContract::new(100.0_f64, 105.0, 0.5, 0.04, 0.01, OptionKind::Call).unwrap();
//! let model = BlackScholes::new(contract);
//!
//! let price = model.price(0.25);
//! assert!(price > 0.0);
//! assert!(model.vega(0.25) > 0.0);
//! ```

mod black_scholes;
pub mod distributions;

pub use black_scholes::BlackScholes;
