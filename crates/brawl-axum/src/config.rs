//! Command-line and environment configuration for the `brawl-relay` binary.
//!
//! Every flag falls back to an environment variable, so a plain `.env` file
//! is enough to run the relay. Values are parsed, never validated: a missing
//! API key is passed on as-is and the upstream rejects the call itself.

use std::time::Duration;

use brawl_upstream::{
    BrawlClientConfig, DEFAULT_BRAWL_BASE_URL, DEFAULT_GIPHY_BASE_URL, GiphyClientConfig,
};
use clap::Parser;

use crate::bootstrap::{CorsConfig, ServerConfig};

/// Relay game-stats and GIF search requests to their upstream APIs.
#[derive(Debug, Clone, Parser)]
#[command(name = "brawl-relay", version, about)]
pub struct RelayArgs {
    /// Interface to bind
    #[arg(long, env = "RELAY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Bearer credential for the game-stats API
    #[arg(long, env = "BRAWL_API_KEY", hide_env_values = true)]
    pub brawl_api_key: Option<String>,

    /// API key for the GIF search API
    #[arg(long, env = "GIPHY_API_KEY", hide_env_values = true)]
    pub giphy_api_key: Option<String>,

    /// Base URL of the game-stats API
    #[arg(long, env = "BRAWL_API_URL", default_value = DEFAULT_BRAWL_BASE_URL)]
    pub brawl_api_url: String,

    /// Base URL of the GIF search API
    #[arg(long, env = "GIPHY_API_URL", default_value = DEFAULT_GIPHY_BASE_URL)]
    pub giphy_api_url: String,

    /// Timeout for upstream calls, in seconds (HTTP client default if unset)
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: Option<u64>,

    /// Comma-separated list of allowed CORS origins (any origin if unset)
    #[arg(long, env = "CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,
}

impl RelayArgs {
    /// Resolve the parsed arguments into the server configuration.
    #[must_use]
    pub fn into_server_config(self) -> ServerConfig {
        let timeout = self.upstream_timeout_secs.map(Duration::from_secs);

        let origins: Vec<String> = self
            .cors_origins
            .into_iter()
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();
        let cors = if origins.is_empty() {
            CorsConfig::AllowAll
        } else {
            CorsConfig::AllowOrigins(origins)
        };

        ServerConfig {
            host: self.host,
            port: self.port,
            brawl: BrawlClientConfig::new()
                .with_base_url(self.brawl_api_url)
                .with_optional_api_key(self.brawl_api_key)
                .with_optional_timeout(timeout),
            giphy: GiphyClientConfig::new()
                .with_base_url(self.giphy_api_url)
                .with_optional_api_key(self.giphy_api_key)
                .with_optional_timeout(timeout),
            cors,
        }
    }
}
