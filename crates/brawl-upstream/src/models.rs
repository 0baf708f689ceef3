//! Upstream wire types.
//!
//! Only the GIF payload is modelled; game-stats bodies are relayed as opaque
//! JSON.

use serde::Deserialize;

/// Envelope of a GIF trending/search answer.
#[derive(Debug, Deserialize)]
pub struct GiphyResponse {
    pub data: Vec<GiphyGif>,
}

/// One GIF in the upstream payload. Unused fields are ignored.
#[derive(Debug, Deserialize)]
pub struct GiphyGif {
    pub id: String,
    pub images: GiphyImages,
}

/// The renditions the relay projects.
#[derive(Debug, Deserialize)]
pub struct GiphyImages {
    pub fixed_width_small: GiphyRendition,
    pub original: GiphyRendition,
}

#[derive(Debug, Deserialize)]
pub struct GiphyRendition {
    pub url: String,
}
