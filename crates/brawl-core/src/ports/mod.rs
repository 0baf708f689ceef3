//! Port definitions (trait abstractions) for the upstream APIs.
//!
//! Ports define the interfaces the web adapter expects from the outbound
//! HTTP clients. They use only domain types; the reqwest implementations
//! live in `brawl-upstream`.

mod error;
mod gif_search;
mod game_stats;

pub use error::{DEFAULT_API_ERROR_MESSAGE, UpstreamError, UpstreamResult};
pub use game_stats::GameStatsPort;
pub use gif_search::GifSearchPort;
