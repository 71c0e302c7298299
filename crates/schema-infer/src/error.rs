//! Error types for schema inference configuration.
//!
//! Inference itself never fails; only loading or validating its
//! configuration can.

use thiserror::Error;

/// Errors raised while building an inference configuration.
#[derive(Error, Debug)]
pub enum InferenceError {
    /// Sampling parameters are out of range.
    #[error("Invalid sampling policy: {0}")]
    InvalidPolicy(String),

    /// Error reading a config file.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML.
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
