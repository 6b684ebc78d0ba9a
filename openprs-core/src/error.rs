//! Error types for openprs

use thiserror::Error;

/// Result type alias for openprs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for openprs operations
#[derive(Error, Debug)]
pub enum Error {
    /// Required environment variable is unset
    #[error("Missing environment variable: {0}")]
    MissingEnv(String),

    /// Configuration value present but unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error while writing feedback
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
