//! Error types for catalog port operations.
//!
//! These are domain-level errors that consumers can handle.
//! Implementation-specific errors (HTTP, JSON) are mapped to these at
//! the adapter boundary.

use thiserror::Error;

/// Errors from catalog port operations.
///
/// Every variant carries a human-readable message; variants that
/// originate in a provider response also carry the HTTP status code so
/// callers can act on it. Cancellation is reported as its own variant
/// and is the only error a caller may silently discard.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The client is missing required configuration (e.g. credential).
    /// Fatal; surfaced before any network activity and never retried.
    #[error("configuration error: {message}")]
    Configuration {
        /// What is missing or wrong
        message: String,
    },

    /// The call was aborted by the caller or by the request timeout.
    #[error("request was cancelled")]
    Cancelled,

    /// The provider rejected the credential (401/403).
    #[error("unauthorized: check your API key")]
    Unauthorized {
        /// The HTTP status the provider returned
        status: u16,
    },

    /// Rate limit still exceeded after the retry budget.
    #[error("rate limit exceeded: please try again later")]
    RateLimited,

    /// Generic provider failure carrying the provider's own message.
    #[error("provider error: {message}")]
    Provider {
        /// HTTP or provider-envelope status, when one was available
        status: Option<u16>,
        /// Provider-supplied or synthesized description
        message: String,
    },

    /// Transport-level failure after the retry budget was exhausted.
    #[error("network error: {message}")]
    Network {
        /// Description of the transport failure
        message: String,
    },

    /// The provider response could not be understood.
    #[error("invalid provider response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },
}

impl CatalogError {
    /// The HTTP status code associated with this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status } => Some(*status),
            Self::RateLimited => Some(429),
            Self::Provider { status, .. } => *status,
            _ => None,
        }
    }

    /// Whether this error is a cancellation, which downstream layers
    /// treat as a silent no-op rather than a failure.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Result type alias for catalog port operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
