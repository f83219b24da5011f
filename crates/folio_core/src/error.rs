//! Folio error types

use thiserror::Error;

/// Errors produced by Folio library crates
#[derive(Error, Debug)]
pub enum FolioError {
    /// Underlying I/O failure (file-backed stores, content files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode or decode persisted data
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Configuration or content file could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value was outside the accepted set
    #[error("Invalid {what}: {value:?}")]
    InvalidValue { what: &'static str, value: String },

    /// Content registry failed validation
    #[error("Content validation failed: {0}")]
    Validation(String),
}

impl FolioError {
    pub fn invalid(what: &'static str, value: impl Into<String>) -> Self {
        FolioError::InvalidValue {
            what,
            value: value.into(),
        }
    }
}

/// Result type for Folio operations
pub type Result<T> = std::result::Result<T, FolioError>;
