//! Unified error types for Boostkit.
//!
//! This module provides a clean error type that wraps internal errors
//! and presents a consistent interface to users.

use thiserror::Error;

/// All Boostkit errors.
///
/// Accumulator operations never fail; these errors come from typed value
/// extraction and from configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong type for operation
    #[error("wrong type: expected {expected}, got {actual}")]
    WrongType {
        /// Expected type
        expected: String,
        /// Actual type found
        actual: String,
    },

    /// Invalid input (bad variant label, out-of-range configuration)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Logging could not be initialized
    #[error("logging error: {0}")]
    Logging(String),
}

/// Result type for Boostkit operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a type mismatch.
    pub fn is_wrong_type(&self) -> bool {
        matches!(self, Error::WrongType { .. })
    }

    /// Check if the caller supplied bad input or configuration.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }

    /// Check if this is a serialization error.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Error::Serialization(_))
    }
}

// Convert from internal core errors
impl From<boostkit_core::Error> for Error {
    fn from(e: boostkit_core::Error) -> Self {
        use boostkit_core::Error as CoreError;
        match e {
            CoreError::WrongType { expected, actual } => Error::WrongType {
                expected: expected.to_string(),
                actual: actual.to_string(),
            },
            CoreError::InvalidVariant(msg) => Error::InvalidInput(format!("variant: {}", msg)),
            CoreError::InvalidConfig(msg) => Error::InvalidInput(msg),
            CoreError::Serialization(msg) => Error::Serialization(msg),
        }
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
