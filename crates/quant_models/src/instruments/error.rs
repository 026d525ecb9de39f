//! Instrument error types.
//!
//! This module provides structured error handling for contract
//! construction.

use thiserror::Error;

/// Contract-related errors.
///
/// Every variant corresponds to a violated positivity invariant; the pricing
/// formulas divide by time-to-maturity and take logarithms of spot and
/// strike, so none of these values may be zero or negative.
///
/// # Variants
/// - `InvalidStrike`: Strike price is non-positive
/// - `InvalidSpot`: Spot price is non-positive
/// - `InvalidExpiry`: Time to maturity is non-positive
///
/// # Examples
/// ```
/// use quant_models::instruments::ModelError;
///
/// let err = ModelError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid spot price (non-positive).
    #[error("Invalid spot: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Invalid time to maturity (non-positive).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },
}
