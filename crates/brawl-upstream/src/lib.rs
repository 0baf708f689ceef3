#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Client structs are generic over the HTTP backend; callers use the Default*
// aliases through the brawl-core ports
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Clients
pub use client::{DefaultBrawlClient, DefaultGiphyClient};

// Configuration
pub use config::{
    BrawlClientConfig, DEFAULT_BRAWL_BASE_URL, DEFAULT_GIPHY_BASE_URL, GiphyClientConfig,
};

// Errors raised while constructing a client
pub use error::ClientError;
