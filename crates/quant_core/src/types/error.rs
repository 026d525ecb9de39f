//! Structured error types for string boundaries.
//!
//! The numerical routines themselves never return errors (see the crate-level
//! best-effort policy); the only failure mode this crate owns is parsing a
//! method name supplied as text, which happens at CLI and configuration
//! boundaries.

use thiserror::Error;

/// Error returned when a method name supplied as text does not match any
/// known algorithm.
///
/// Method selection inside the library is always an enum, so an invalid name
/// is unrepresentable past the parse boundary.
///
/// # Example
///
/// ```
/// use quant_core::math::quadrature::QuadratureMethod;
/// use quant_core::types::MethodParseError;
///
/// let err = "gauss".parse::<QuadratureMethod>().unwrap_err();
/// assert!(matches!(err, MethodParseError::UnknownMethod { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MethodParseError {
    /// The supplied name matches no known method.
    #[error("unknown method '{name}', expected one of: {expected}")]
    UnknownMethod {
        /// The name that failed to parse.
        name: String,
        /// Comma-separated list of accepted names.
        expected: &'static str,
    },
}
