//! Response body parsing for the upstream clients.

use brawl_core::GifResult;
use serde_json::Value;

use crate::error::ClientResult;
use crate::models::{GiphyGif, GiphyResponse};

/// Pull the `reason` string out of a game-stats error body.
///
/// Absent, non-JSON, or non-string reasons all yield `None`.
pub fn extract_reason(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value.get("reason")?.as_str().map(str::to_string)
}

/// Parse a success body as arbitrary JSON.
pub fn parse_json_body(body: &[u8]) -> ClientResult<Value> {
    Ok(serde_json::from_slice(body)?)
}

/// Parse a GIF answer and project each hit.
pub fn parse_gif_response(body: &[u8]) -> ClientResult<Vec<GifResult>> {
    let response: GiphyResponse = serde_json::from_slice(body)?;
    Ok(response.data.into_iter().map(to_gif_result).collect())
}

fn to_gif_result(gif: GiphyGif) -> GifResult {
    GifResult {
        id: gif.id,
        preview: gif.images.fixed_width_small.url,
        full: gif.images.original.url,
    }
}
