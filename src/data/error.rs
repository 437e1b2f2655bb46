//! Error types for data operations
//!
//! `FormatError` describes why a single line was rejected; `DataError`
//! covers file-level failures of loading records and settings.

use thiserror::Error;

pub use crate::constants::REQUIRED_FIELD_COUNT;

/// A line that does not form a valid record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Line is empty or contains only whitespace
    #[error("line is empty")]
    EmptyLine,

    /// Fewer fields than a record needs
    #[error("expected at least {required} fields, found {actual}")]
    TooFewFields { required: usize, actual: usize },

    /// Id field is empty after cleaning
    #[error("id must not be empty")]
    EmptyId,

    /// Email field is empty after cleaning
    #[error("email must not be empty")]
    EmptyEmail,
}

/// Errors that can occur during data operations
#[derive(Error, Debug)]
pub enum DataError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// File is too large for eager loading
    #[error("File too large: {size_bytes} bytes (max {max_bytes} bytes)")]
    TooLarge { size_bytes: u64, max_bytes: u64 },
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;
