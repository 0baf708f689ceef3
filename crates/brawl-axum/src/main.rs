//! `brawl-relay` entry point.

use anyhow::Result;
use brawl_axum::{RelayArgs, start_server};
use clap::Parser;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "brawl_relay=info,brawl_axum=info,brawl_upstream=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads env fallbacks
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let args = RelayArgs::parse();
    start_server(args.into_server_config()).await
}
