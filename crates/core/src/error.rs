//! Error types for the core crate.
//!
//! Accumulator operations themselves are total; errors only come from typed
//! extraction out of a [`Value`](crate::Value) and from configuration.

use thiserror::Error;

/// Core errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A value of one type was requested but another was found
    #[error("wrong type: expected {expected}, got {actual}")]
    WrongType {
        /// Expected type name
        expected: &'static str,
        /// Actual type name
        actual: &'static str,
    },

    /// Variant label could not be parsed
    #[error("invalid variant: {0}")]
    InvalidVariant(String),

    /// Configuration is structurally valid JSON but semantically wrong
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
