//! Error types for GitHub operations

use thiserror::Error;

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during GitHub operations
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure: DNS, connect, TLS, or reading the body
    #[error("GitHub request failed")]
    Request(#[from] reqwest::Error),

    /// Response body is not valid JSON or has the wrong shape
    #[error("Invalid JSON in GitHub response")]
    Decode(#[from] serde_json::Error),

    /// Endpoint override could not be parsed
    #[error("Invalid GraphQL endpoint")]
    Endpoint(#[from] url::ParseError),
}
