//! Upstream clients for the game-stats and GIF search APIs.
//!
//! Each client is generic over an HTTP backend so it can run against canned
//! responses in tests. Production code uses the `Default*` aliases.

mod gifs;
mod stats;

use crate::config::{BrawlClientConfig, GiphyClientConfig};
use crate::error::ClientResult;
use crate::http::{HttpBackend, ReqwestBackend};

// ============================================================================
// Type Aliases
// ============================================================================

/// Game-stats client using the reqwest HTTP backend.
pub type DefaultBrawlClient = BrawlClient<ReqwestBackend>;

/// GIF search client using the reqwest HTTP backend.
pub type DefaultGiphyClient = GiphyClient<ReqwestBackend>;

// ============================================================================
// Clients
// ============================================================================

/// Client for the game-stats API (the request forwarder).
pub struct BrawlClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: BrawlClientConfig,
}

/// Client for the GIF search API.
pub struct GiphyClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: GiphyClientConfig,
}

impl DefaultBrawlClient {
    /// Create a client with the given configuration.
    pub fn new(config: &BrawlClientConfig) -> ClientResult<Self> {
        let backend = ReqwestBackend::new(config.timeout, &config.user_agent)?;
        Ok(Self {
            backend,
            config: config.clone(),
        })
    }
}

impl DefaultGiphyClient {
    /// Create a client with the given configuration.
    pub fn new(config: &GiphyClientConfig) -> ClientResult<Self> {
        let backend = ReqwestBackend::new(config.timeout, &config.user_agent)?;
        Ok(Self {
            backend,
            config: config.clone(),
        })
    }
}

impl<B: HttpBackend> BrawlClient<B> {
    /// Create a client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: BrawlClientConfig, backend: B) -> Self {
        Self { backend, config }
    }
}

impl<B: HttpBackend> GiphyClient<B> {
    /// Create a client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: GiphyClientConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
