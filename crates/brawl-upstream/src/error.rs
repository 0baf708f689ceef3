//! Internal error types for upstream client operations.
//!
//! These errors are internal to `brawl-upstream` and are mapped to
//! `brawl_core::UpstreamError` at the port boundary.

use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors related to upstream API calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The upstream answered with a non-success status.
    #[error("upstream request failed with status {status}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// `reason` field of the error body, when there was one
        reason: Option<String>,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
