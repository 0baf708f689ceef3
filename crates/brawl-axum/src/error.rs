//! Axum-specific error types and mappings.
//!
//! Every failure leaves the server as `(status, { "error": message })`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use brawl_core::UpstreamError;
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Nothing to return for an otherwise valid request.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The upstream rejected the call; its status is passed through.
    #[error("Upstream error {status}: {message}")]
    Upstream { status: u16, message: String },

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    /// Map an upstream failure for a relayed game-stats route.
    ///
    /// Upstream rejections keep their status and message. Transport failures
    /// become a 500 carrying the route's `fallback` message.
    #[must_use]
    pub fn from_upstream(err: UpstreamError, fallback: &str) -> Self {
        match err {
            UpstreamError::Api { status, message } => Self::Upstream { status, message },
            UpstreamError::Transport { .. } => Self::Internal(fallback.to_string()),
        }
    }

    /// HTTP status this error is answered with.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            Self::NotFound(msg) | Self::Internal(msg) | Self::Upstream { message: msg, .. } => msg,
        };

        (status, axum::Json(ErrorBody { error: message })).into_response()
    }
}
