//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where the upstream clients are constructed
//! and wired into the router. Handlers only ever see the ports.

use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use brawl_core::{GameStatsPort, GifSearchPort};
use brawl_upstream::{
    BrawlClientConfig, DefaultBrawlClient, DefaultGiphyClient, GiphyClientConfig,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins.
    #[default]
    AllowAll,
    /// Allow specific origins.
    AllowOrigins(Vec<String>),
}

/// Server configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Game-stats client settings, including its bearer credential.
    pub brawl: BrawlClientConfig,
    /// GIF search client settings, including its API key.
    pub giphy: GiphyClientConfig,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            brawl: BrawlClientConfig::default(),
            giphy: GiphyClientConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// Game-stats forwarder.
    pub stats: Arc<dyn GameStatsPort>,
    /// GIF search client.
    pub gifs: Arc<dyn GifSearchPort>,
}

impl AxumContext {
    /// Build a context from already constructed ports.
    pub fn new(stats: Arc<dyn GameStatsPort>, gifs: Arc<dyn GifSearchPort>) -> Self {
        Self { stats, gifs }
    }
}

/// Construct the reqwest-backed upstream clients.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let stats: Arc<dyn GameStatsPort> = Arc::new(
        DefaultBrawlClient::new(&config.brawl).context("failed to build game-stats client")?,
    );
    let gifs: Arc<dyn GifSearchPort> = Arc::new(
        DefaultGiphyClient::new(&config.giphy).context("failed to build GIF search client")?,
    );

    Ok(AxumContext::new(stats, gifs))
}

/// Serve the relay on a pre-bound listener until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    ctx: AxumContext,
    cors: &CorsConfig,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = crate::routes::create_router(ctx, cors);

    info!("brawl-relay listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("brawl-relay shut down");
    Ok(())
}

/// Start the web server on the configured address and run until Ctrl-C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config)?;

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    serve(listener, ctx, &config.cors, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C, graceful shutdown disabled: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
