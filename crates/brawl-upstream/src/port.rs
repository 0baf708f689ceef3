//! Port trait implementations for the upstream clients.
//!
//! Maps internal `ClientError`s onto the tagged `UpstreamError` owned by
//! `brawl-core`.

use async_trait::async_trait;
use brawl_core::{GameStatsPort, GifQuery, GifResult, GifSearchPort, UpstreamError, UpstreamResult};
use serde_json::Value;

use crate::client::{BrawlClient, GiphyClient};
use crate::error::ClientError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ClientError` to core `UpstreamError`.
fn map_error(err: ClientError) -> UpstreamError {
    match err {
        ClientError::ApiRequestFailed { status, reason } => UpstreamError::api(status, reason),
        ClientError::Network(e) => UpstreamError::transport(e),
        ClientError::InvalidUrl(e) => UpstreamError::transport(e),
        ClientError::JsonParse(e) => UpstreamError::transport(e),
    }
}

// ============================================================================
// Port Implementations
// ============================================================================

#[async_trait]
impl<B: HttpBackend> GameStatsPort for BrawlClient<B> {
    async fn forward(&self, path: &str) -> UpstreamResult<Value> {
        self.forward_json(path).await.map_err(map_error)
    }
}

#[async_trait]
impl<B: HttpBackend> GifSearchPort for GiphyClient<B> {
    async fn search(&self, query: &GifQuery) -> UpstreamResult<Vec<GifResult>> {
        self.fetch_gifs(query).await.map_err(map_error)
    }
}
