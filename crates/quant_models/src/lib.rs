//! # Quant Models (L2: Business Logic)
//!
//! Option contracts and the analytics computed on them.
//!
//! This crate provides:
//! - Contract definitions (European vanilla options with dividends)
//! - Closed-form Black-Scholes pricing and analytic Greeks
//! - Implied-volatility solving via three interchangeable root finders
//! - Finite-difference Greeks as an independent numerical cross-check
//! - Standard-normal distribution helpers generic over the float type
//!
//! ## Design Principles
//!
//! - **Validating constructors**: a constructed [`instruments::OptionContract`]
//!   always satisfies the positivity invariants its formulas divide by
//! - **Signed payoff multiplier** internally, a two-variant
//!   [`instruments::OptionKind`] at the API boundary
//! - **Best-effort solving**: implied-volatility estimates always come back
//!   with diagnostics attached, never as a bare scalar (see
//!   [`implied::ImpliedVolEstimate`])

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod greeks;
pub mod implied;
pub mod instruments;
