//! Error types for upstream port operations.

use thiserror::Error;

/// Message used when the game-stats upstream rejects a call without a
/// readable `reason`.
pub const DEFAULT_API_ERROR_MESSAGE: &str = "Brawl API Error";

/// Errors from upstream port operations.
///
/// Callers decide per route whether the upstream status is propagated, so
/// the two kinds are kept apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// The upstream answered with a non-success status.
    #[error("upstream responded with status {status}: {message}")]
    Api {
        /// HTTP status returned by the upstream
        status: u16,
        /// Upstream-provided reason, or a fallback
        message: String,
    },

    /// The call never produced a usable answer (network, URL, or body).
    #[error("upstream transport failure: {cause}")]
    Transport {
        /// Description of the underlying failure
        cause: String,
    },
}

impl UpstreamError {
    /// Build an `Api` error, falling back to [`DEFAULT_API_ERROR_MESSAGE`].
    #[must_use]
    pub fn api(status: u16, reason: Option<String>) -> Self {
        Self::Api {
            status,
            message: reason.unwrap_or_else(|| DEFAULT_API_ERROR_MESSAGE.to_string()),
        }
    }

    /// Build a `Transport` error from any displayable cause.
    pub fn transport(cause: impl ToString) -> Self {
        Self::Transport {
            cause: cause.to_string(),
        }
    }

    /// Upstream status, if the upstream answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport { .. } => None,
        }
    }
}

/// Result type alias for upstream port operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
