//! Error types for the comparison harness.

use thiserror::Error;

/// Errors that can occur while encoding, comparing or exporting datasets.
#[derive(Error, Debug)]
pub enum CompareError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Encoder name not recognized.
    #[error("Unknown encoder: {0}")]
    UnknownEncoder(String),

    /// Harness option out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
