//! Game-stats upstream port trait.

use async_trait::async_trait;
use serde_json::Value;

use super::error::UpstreamResult;

/// Port trait for the game-stats API.
///
/// One call is one authenticated GET against the API base. Implementations
/// never retry.
#[async_trait]
pub trait GameStatsPort: Send + Sync {
    /// Fetch `path` (relative to the API base) and return the JSON body
    /// verbatim.
    ///
    /// # Arguments
    ///
    /// * `path` - Upstream path, e.g. `/players/%23ABC123`
    async fn forward(&self, path: &str) -> UpstreamResult<Value>;
}
