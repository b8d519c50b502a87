//! Internal API response types for the Giphy GIF API.
//!
//! These types are internal to `gifdex-giphy` and are not exposed to
//! consumers. External consumers see only the port DTOs defined in
//! `gifdex-core`. Provider records are consumed exactly once, by the
//! mapping function in `parsing`.

use crate::config::{DEFAULT_BASE_URL, GiphyClientConfig};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the Giphy client.
#[derive(Debug, Clone)]
pub(crate) struct GiphyConfig {
    /// Base URL for the Giphy GIF API (default: <https://api.giphy.com/v1/gifs>)
    pub base_url: Url,
    /// API key appended as a query parameter on every call
    pub api_key: Option<String>,
    /// User agent for HTTP requests
    pub user_agent: String,
    /// Whole-call budget covering all attempts and backoff delays (default: 8s)
    pub request_timeout: Duration,
    /// Total attempt budget for transient failures (default: 3)
    pub max_attempts: u32,
    /// Base delay for exponential backoff (default: 300ms)
    pub retry_base_delay: Duration,
    /// Cache time-to-live (default: 10 minutes)
    pub cache_ttl: Duration,
}

impl Default for GiphyConfig {
    // The public config owns the default values; deriving keeps the
    // two structs from drifting apart.
    fn default() -> Self {
        Self::from(&GiphyClientConfig::default())
    }
}

impl From<&GiphyClientConfig> for GiphyConfig {
    fn from(config: &GiphyClientConfig) -> Self {
        Self {
            base_url: Url::parse(&config.base_url).unwrap_or_else(|_| {
                Url::parse(DEFAULT_BASE_URL).expect("default Giphy API URL is valid")
            }),
            api_key: config.api_key.clone(),
            user_agent: config.user_agent.clone(),
            request_timeout: config.timeout,
            max_attempts: config.max_attempts,
            retry_base_delay: config.retry_base_delay,
            cache_ttl: config.cache_ttl,
        }
    }
}

// ============================================================================
// Provider record shapes
// ============================================================================

/// One image variant inside a provider record. Dimensions and size
/// arrive as strings on the wire.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GiphyImage {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub width: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub size: Option<String>,
}

/// The named image-variant map of a provider record.
///
/// Only the variants the mapper consults are modeled; serde ignores the
/// rest of the (large) variant map.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct GiphyImages {
    #[serde(default)]
    pub original: Option<GiphyImage>,
    #[serde(default)]
    pub fixed_height: Option<GiphyImage>,
    #[serde(default)]
    pub preview_gif: Option<GiphyImage>,
    #[serde(default)]
    pub preview_webp: Option<GiphyImage>,
    #[serde(default)]
    pub fixed_width_small_still: Option<GiphyImage>,
    #[serde(default)]
    pub fixed_height_small_still: Option<GiphyImage>,
}

/// Uploader sub-object of a provider record.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GiphyUser {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub profile_url: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub is_verified: Option<bool>,
}

/// One raw GIF record as returned by the provider. Never mutated.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GiphyGif {
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub import_datetime: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub images: GiphyImages,
    #[serde(default)]
    pub user: Option<GiphyUser>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

// ============================================================================
// Response envelopes
// ============================================================================

/// Pagination block of a search response.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub(crate) struct Pagination {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub offset: u64,
}

/// Envelope of the search endpoint. The `meta` block is checked
/// generically by the HTTP layer before this shape is deserialized.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchEnvelope {
    pub data: Vec<GiphyGif>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Envelope of the single-item endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ItemEnvelope {
    pub data: GiphyGif,
}

/// Envelope of the batch (comma-joined ids) endpoint. The provider
/// returns whatever subset of the requested ids it still has.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ListEnvelope {
    pub data: Vec<GiphyGif>,
}
