//! Error types for Giphy operations.
//!
//! Port consumers see only `gifdex_core::CatalogError`; these errors
//! are mapped to it at the boundary. They are public because the
//! `Transport` trait returns them.

use thiserror::Error;

/// Result type alias for Giphy operations.
pub type GiphyResult<T> = Result<T, GiphyError>;

/// Errors related to Giphy API operations.
///
/// Error messages never include full request URLs since those carry the
/// API key; only the request path is recorded.
#[derive(Debug, Error)]
pub enum GiphyError {
    /// No API key was configured. Fatal, never retried.
    #[error("Giphy API key is required")]
    MissingApiKey,

    /// The call was aborted by the caller's token or by the request
    /// timeout. Short-circuits retries.
    #[error("request was cancelled")]
    Cancelled,

    /// Request completed with a non-success HTTP status.
    #[error("Giphy API request failed with status {status}: {path}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The request path (query string omitted)
        path: String,
    },

    /// 2xx transport response whose envelope `meta.status` reported a
    /// failure. Carries the provider's own message.
    #[error("Giphy rejected the request ({status}): {message}")]
    ProviderRejected {
        /// Provider-embedded status code
        status: u16,
        /// Provider-supplied message
        message: String,
    },

    /// Transport-level failure (connect, TLS, body read).
    #[error("network error: {message}")]
    Network {
        /// Description of the failure
        message: String,
    },

    /// Response body was not the JSON shape we expect.
    #[error("invalid response from Giphy: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// API returned an otherwise unusable response.
    #[error("invalid response from Giphy: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },
}
