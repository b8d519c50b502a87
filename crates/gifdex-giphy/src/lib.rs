#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

mod cache;
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

// Client
pub use client::{DefaultGiphyClient, GiphyClient};

// Configuration
pub use config::GiphyClientConfig;

// Errors
pub use error::{GiphyError, GiphyResult};

// Transport seam, for custom transports
pub use http::{RawResponse, ReqwestTransport, Transport};
