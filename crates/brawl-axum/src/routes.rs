//! Route definitions and router construction.
//!
//! The route table below is the whole public surface of the relay. All
//! routes are GET; game-stats routes are produced by the factories in
//! [`handlers::relay`].

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::get;
use brawl_core::paths;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers::{self, relay};
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// All relay routes, without state applied.
pub(crate) fn relay_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::liveness))
        // Player and club lookups (tag parameter)
        .route(
            "/player/{tag}",
            relay::by_tag(paths::player, "Failed to fetch player"),
        )
        .route(
            "/battlelog/{tag}",
            relay::by_tag(paths::battlelog, "Failed to fetch battlelog"),
        )
        .route(
            "/club/{tag}",
            relay::by_tag(paths::club, "Failed to fetch club"),
        )
        // Rankings
        .route(
            "/rankings/players",
            relay::fixed(paths::PLAYER_RANKINGS, "Failed to fetch player rankings"),
        )
        .route(
            "/rankings/brawlers/{brawlerId}",
            relay::by_id(paths::brawler_rankings, "Failed to fetch brawler rankings"),
        )
        // Catalog
        .route(
            "/brawlers",
            relay::fixed(paths::BRAWLERS, "Failed to fetch brawlers"),
        )
        .route(
            "/brawler/{id}",
            relay::by_id(paths::brawler, "Failed to fetch brawler"),
        )
        .route(
            "/gamemodes",
            relay::fixed(paths::GAME_MODES, "Failed to fetch game modes"),
        )
        .route(
            "/events",
            relay::fixed(paths::EVENT_ROTATION, "Failed to fetch events"),
        )
        // GIF search
        .route("/gif", get(handlers::gif::search))
}

/// Create the main Axum router with all routes, request tracing and CORS.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);

    relay_routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(cors_config))
}
