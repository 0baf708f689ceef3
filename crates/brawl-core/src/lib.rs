#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod gif;
pub mod paths;
pub mod ports;
pub mod tag;

pub use gif::{GifQuery, GifResult};
pub use ports::{GameStatsPort, GifSearchPort, UpstreamError, UpstreamResult};
pub use tag::PlayerTag;
