//! Shared core types.
//!
//! This module provides:
//! - `error`: Structured error types for the string boundaries of the crate
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level:
//! - [`MethodParseError`] from `error`

pub mod error;

pub use error::MethodParseError;
