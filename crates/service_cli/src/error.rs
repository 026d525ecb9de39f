//! CLI error types
//!
//! Every command returns [`Result`]; the process exit code is non-zero
//! whenever a [`CliError`] reaches `main`.

use thiserror::Error;

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// A required input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// A command-line argument failed validation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A name did not match any known alternative
    #[error("Invalid argument: {0}")]
    Parse(#[from] quant_core::types::MethodParseError),

    /// The configuration file failed to parse
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Contract parameters were rejected by the model layer
    #[error("Model error: {0}")]
    Model(#[from] quant_models::instruments::ModelError),

    /// Chain ingestion or output writing failed
    #[error("Chain error: {0}")]
    Chain(#[from] adapter_chain::ChainError),

    /// The validation battery reported failures
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
