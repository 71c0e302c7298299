//! Error types for the position generator.

use thiserror::Error;

/// Errors that can occur while generating or exporting positions.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Requested row count is negative, fractional or not a number.
    #[error("Invalid row count: {0} (expected a non-negative integer)")]
    InvalidCount(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record could not be converted to a row.
    #[error("Row conversion error: {0}")]
    Value(#[from] grid_core::ValueError),
}
