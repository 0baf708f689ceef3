//! Shared fixtures for brawl-axum integration tests.
//!
//! Each test spawns a stub upstream (both APIs on one listener) and a relay
//! pointed at it, both on ephemeral ports.

pub mod stub;

use brawl_axum::{CorsConfig, ServerConfig, bootstrap, serve};
use brawl_upstream::{BrawlClientConfig, GiphyClientConfig};
use tokio::net::TcpListener;

/// Key the stub accepts from the relay's game-stats client.
pub const BRAWL_KEY: &str = "test-brawl-key";

/// Key the stub accepts from the relay's GIF client.
pub const GIPHY_KEY: &str = "test-giphy-key";

/// Relay configuration pointing both clients at `upstream`.
pub fn relay_config(upstream: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        brawl: BrawlClientConfig::new()
            .with_base_url(format!("{upstream}/brawl/v1"))
            .with_api_key(BRAWL_KEY),
        giphy: GiphyClientConfig::new()
            .with_base_url(format!("{upstream}/gifs"))
            .with_api_key(GIPHY_KEY),
        cors: CorsConfig::AllowAll,
    }
}

/// Spawn a relay for `config` and return its base URL.
pub async fn spawn_relay(config: ServerConfig) -> String {
    let ctx = bootstrap(&config).expect("Failed to bootstrap relay");
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind relay");
    let addr = listener.local_addr().expect("relay address");

    tokio::spawn(async move {
        serve(listener, ctx, &config.cors, std::future::pending()).await
    });

    format!("http://{addr}")
}

/// Stub upstream plus a relay with valid keys. Returns the relay URL.
pub async fn setup() -> String {
    let upstream = stub::spawn().await;
    spawn_relay(relay_config(&upstream)).await
}

/// GET `url` and return the status and JSON body.
pub async fn get_json(url: &str) -> (reqwest::StatusCode, serde_json::Value) {
    let response = reqwest::get(url).await.expect("Failed to send request");
    let status = response.status();
    let body = response.json().await.expect("Body should be JSON");
    (status, body)
}
