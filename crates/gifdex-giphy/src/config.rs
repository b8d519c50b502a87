//! Public configuration for the Giphy client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this. The API key is an explicit
//! injected value; the client never reads the environment itself.

use std::time::Duration;

/// Default base endpoint of the Giphy GIF API.
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.giphy.com/v1/gifs";

/// Configuration for the Giphy catalog client.
///
/// Use the builder pattern methods to customize the client
/// configuration.
///
/// # Example
///
/// ```
/// use gifdex_giphy::GiphyClientConfig;
/// use std::time::Duration;
///
/// let config = GiphyClientConfig::new()
///     .with_api_key("your-api-key")
///     .with_timeout(Duration::from_secs(4));
/// ```
#[derive(Debug, Clone)]
pub struct GiphyClientConfig {
    /// Base URL for the Giphy GIF API
    pub(crate) base_url: String,
    /// API key; operations that reach the network fail without one
    pub(crate) api_key: Option<String>,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Whole-call budget covering all attempts and backoff delays
    pub(crate) timeout: Duration,
    /// Total attempt budget (first try plus retries)
    pub(crate) max_attempts: u32,
    /// Backoff before the first retry; doubles each further retry
    pub(crate) retry_base_delay: Duration,
    /// How long cached items stay live
    pub(crate) cache_ttl: Duration,
}

impl Default for GiphyClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            user_agent: concat!("gifdex-giphy/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(8),
            max_attempts: 3,
            retry_base_delay: Duration::from_millis(300),
            cache_ttl: Duration::from_secs(600),
        }
    }
}

impl GiphyClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the Giphy API.
    ///
    /// Defaults to `https://api.giphy.com/v1/gifs`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key used to authenticate every call.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set an optional API key.
    #[must_use]
    pub fn with_optional_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the whole-call time budget.
    ///
    /// Defaults to 8 seconds. The budget covers every attempt and the
    /// backoff delays between them; when it elapses the call reports
    /// cancellation.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the total attempt budget for transient failures.
    ///
    /// Defaults to 3 attempts (1 initial + 2 retries).
    #[must_use]
    pub const fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the base delay for exponential backoff retries.
    ///
    /// Defaults to 300ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    /// Set the time-to-live for cached items.
    ///
    /// Defaults to 10 minutes.
    #[must_use]
    pub const fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
}
