//! LiveDNS client errors

use thiserror::Error;

/// Errors that can occur when interacting with the LiveDNS API
#[derive(Debug, Error)]
pub enum LiveDnsError {
    /// HTTP request/response error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// LiveDNS API returned an error
    #[error("LiveDNS API error: {0}")]
    Api(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Authentication failed (invalid key, expired, etc.)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Domain not found
    #[error("Not found: {0}")]
    NotFound(String),
}
