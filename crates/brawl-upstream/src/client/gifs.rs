//! GIF trending/search queries.

use brawl_core::{GifQuery, GifResult};
use tracing::{debug, warn};

use crate::error::{ClientError, ClientResult};
use crate::http::HttpBackend;
use crate::parsing::parse_gif_response;
use crate::url::build_gif_url;

use super::GiphyClient;

impl<B: HttpBackend> GiphyClient<B> {
    /// Run `query` and project the hits. No hits is an empty vector.
    pub(crate) async fn fetch_gifs(&self, query: &GifQuery) -> ClientResult<Vec<GifResult>> {
        let api_key = self.config.api_key.as_deref().unwrap_or_default();
        let url = build_gif_url(&self.config.base_url, api_key, query)?;

        debug!(
            trending = matches!(query, GifQuery::Trending),
            "Querying GIF upstream"
        );
        let response = self.backend.get(&url, None).await?;

        if !response.is_success() {
            warn!(status = response.status, "GIF upstream rejected request");
            return Err(ClientError::ApiRequestFailed {
                status: response.status,
                reason: None,
            });
        }

        parse_gif_response(&response.body)
    }
}
