//! URL construction helpers for the upstream APIs.

use brawl_core::GifQuery;
use url::Url;

/// Results requested per GIF query.
pub const GIF_PAGE_SIZE: u8 = 3;

/// Content rating requested for GIFs.
pub const GIF_RATING: &str = "pg";

/// Join the game-stats base URL with an upstream path.
///
/// The path is appended as-is, so an already percent-encoded tag (`%23...`)
/// reaches the upstream untouched.
pub fn build_stats_url(base_url: &str, path: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!("{}{path}", base_url.trim_end_matches('/')))
}

/// Build the trending or search URL for a GIF query.
pub fn build_gif_url(
    base_url: &str,
    api_key: &str,
    query: &GifQuery,
) -> Result<Url, url::ParseError> {
    let base = base_url.trim_end_matches('/');
    let key = urlencoding::encode(api_key);

    let raw = match query {
        GifQuery::Trending => format!(
            "{base}/trending?api_key={key}&limit={GIF_PAGE_SIZE}&rating={GIF_RATING}"
        ),
        GifQuery::Search(q) => format!(
            "{base}/search?api_key={key}&q={}&limit={GIF_PAGE_SIZE}&rating={GIF_RATING}",
            urlencoding::encode(q)
        ),
    };

    Url::parse(&raw)
}
