//! Client error types

use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Login rejected by the server
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Registration rejected by the server
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}
