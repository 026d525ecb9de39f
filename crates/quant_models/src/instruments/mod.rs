//! Option contract definitions.
//!
//! This module provides the validated contract type and the payoff
//! direction tag consumed by every analytic in the crate.
//!
//! # Architecture
//!
//! - [`OptionContract`]: immutable, validated market-parameter tuple
//! - [`OptionKind`]: two-variant call/put tag, collapsed to a signed
//!   multiplier only inside the pricing formulas
//! - [`ModelError`]: structured construction failures
//!
//! # Examples
//!
//! ```
//! use quant_models::instruments::{OptionContract, OptionKind};
//!
//! let contract = OptionContract::new(
//!     130.0_f64,
//!     130.694,
//!     0.021918,
//!     0.0423,
//!     0.0,
//!     OptionKind::Put,
//! )
//! .unwrap();
//!
//! assert_eq!(contract.kind(), OptionKind::Put);
//! ```

mod contract;
mod error;
mod payoff;

pub use contract::OptionContract;
pub use error::ModelError;
pub use payoff::OptionKind;
