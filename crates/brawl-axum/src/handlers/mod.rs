//! HTTP request handlers for the relay.
//!
//! `relay` builds the game-stats routes from a path builder and a fallback
//! message; `gif` is the one hand-written route.

pub mod gif;
pub mod relay;

/// Fixed body of the liveness probe.
pub const LIVENESS_MESSAGE: &str = "Brawl Backend Running 🚀";

/// Liveness probe. Never touches configuration or the upstreams.
pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}
