//! Giphy catalog client.
//!
//! This module provides the main client for the Giphy GIF API. The
//! client is generic over a transport, allowing for easy testing; use
//! `DefaultGiphyClient` for production code and interact with it
//! through the `CatalogPort` trait.

mod items;
mod search;

use crate::cache::ItemCache;
use crate::config::GiphyClientConfig;
use crate::error::{GiphyError, GiphyResult};
use crate::http::{HttpClient, ReqwestTransport, Transport};
use crate::models::GiphyConfig;
use gifdex_core::{KvStore, MemoryKvStore};
use std::sync::Arc;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Giphy client using the reqwest transport.
pub type DefaultGiphyClient = GiphyClient<ReqwestTransport>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Giphy GIF API.
///
/// Holds the shared request execution policy and the two-tier item
/// cache. Most code should use `DefaultGiphyClient::new()`; the
/// generic parameter exists for callers supplying their own
/// `Transport`.
pub struct GiphyClient<T: Transport> {
    pub(crate) http: HttpClient<T>,
    pub(crate) config: GiphyConfig,
    pub(crate) cache: ItemCache,
}

impl DefaultGiphyClient {
    /// Create a new client with the given configuration, backed by an
    /// in-memory session store.
    #[must_use]
    pub fn new(config: &GiphyClientConfig) -> Self {
        Self::with_session_store(config, Arc::new(MemoryKvStore::new()))
    }

    /// Create a new client whose session cache tier is backed by the
    /// given store (session storage in a browser host, for example).
    #[must_use]
    pub fn with_session_store(config: &GiphyClientConfig, store: Arc<dyn KvStore>) -> Self {
        let internal = GiphyConfig::from(config);
        let transport = ReqwestTransport::new(&internal.user_agent);
        GiphyClient::with_transport(config, transport, store)
    }
}

impl<T: Transport> GiphyClient<T> {
    /// Create a client over a custom transport, with the session cache
    /// tier backed by the given store.
    #[must_use]
    pub fn with_transport(config: &GiphyClientConfig, transport: T, store: Arc<dyn KvStore>) -> Self {
        let internal = GiphyConfig::from(config);
        Self {
            http: HttpClient::new(transport, &internal),
            cache: ItemCache::new(store, internal.cache_ttl),
            config: internal,
        }
    }

    /// Create a client from pre-built parts, for tests that need a
    /// custom cache (manual clock, scripted store).
    #[cfg(test)]
    pub(crate) fn with_parts(config: GiphyConfig, transport: T, cache: ItemCache) -> Self {
        Self {
            http: HttpClient::new(transport, &config),
            config,
            cache,
        }
    }

    /// The configured credential, or the fatal configuration error.
    ///
    /// Checked lazily at URL construction time, so cache hits still
    /// succeed on an unconfigured client.
    pub(crate) fn api_key(&self) -> GiphyResult<&str> {
        self.config.api_key.as_deref().ok_or(GiphyError::MissingApiKey)
    }
}
