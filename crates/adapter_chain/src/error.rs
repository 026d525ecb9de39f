//! Chain adapter error types.
//!
//! This module provides structured error types for chain ingestion and
//! output using `thiserror` for derivation.

use thiserror::Error;

/// Convenience alias for chain adapter results.
pub type Result<T> = std::result::Result<T, ChainError>;

/// Errors that can occur while reading or writing option chains.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Underlying file system failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV input or output failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A record parsed but failed domain validation.
    #[error("invalid record at line {line}: {reason}")]
    InvalidRecord {
        /// One-based line number in the source file, counting the header.
        line: u64,
        /// What made the record unusable.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_record_display() {
        let err = ChainError::InvalidRecord {
            line: 7,
            reason: "strike must be positive".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "invalid record at line 7: strike must be positive"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
        let err: ChainError = io.into();
        assert!(err.to_string().contains("missing.csv"));
    }

    #[test]
    fn test_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(ChainError::InvalidRecord {
            line: 1,
            reason: "empty".to_string(),
        });
        assert!(err.to_string().contains("line 1"));
    }
}
