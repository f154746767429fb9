//! Error type shared by every exercise module

use thiserror::Error;

/// Errors that can occur in primer operations
///
/// Searches never produce an error: an unreachable goal is an ordinary
/// "not found" result.
#[derive(Debug, Error)]
pub enum PrimerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Cannot sample from an empty distribution")]
    EmptyDistribution,

    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    #[error("Invalid network topology: {0}")]
    InvalidTopology(String),

    #[error("Too many items for exhaustive search: {count} (max {max})")]
    TooManyItems { count: usize, max: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PrimerError {
    pub(crate) fn shape(expected: impl ToString, actual: impl ToString) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

/// Result type for primer operations
pub type PrimerResult<T> = Result<T, PrimerError>;
