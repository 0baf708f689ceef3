//! Request forwarding to the game-stats API.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ClientError, ClientResult};
use crate::http::HttpBackend;
use crate::parsing::{extract_reason, parse_json_body};
use crate::url::build_stats_url;

use super::BrawlClient;

impl<B: HttpBackend> BrawlClient<B> {
    /// GET `path` below the API base with the bearer credential.
    ///
    /// A missing key is sent as an empty token; the upstream rejects it with
    /// its own error.
    pub(crate) async fn forward_json(&self, path: &str) -> ClientResult<Value> {
        let url = build_stats_url(&self.config.base_url, path)?;
        let token = self.config.api_key.as_deref().unwrap_or_default();

        debug!(path, "Forwarding game-stats request");
        let response = self.backend.get(&url, Some(token)).await?;

        if !response.is_success() {
            let reason = extract_reason(&response.body);
            warn!(
                status = response.status,
                path,
                reason = ?reason,
                "Game-stats upstream rejected request"
            );
            return Err(ClientError::ApiRequestFailed {
                status: response.status,
                reason,
            });
        }

        parse_json_body(&response.body)
    }
}
