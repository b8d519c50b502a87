//! HTTP transport abstraction for the Giphy API.
//!
//! This module provides a trait-based transport that allows for
//! dependency injection and easy testing, plus the shared request
//! execution policy: a whole-call time budget combined with caller
//! cancellation, bounded retries with exponential backoff for transient
//! failures, and envelope-status classification.

use crate::error::{GiphyError, GiphyResult};
use crate::models::GiphyConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

/// HTTP statuses worth retrying. Everything else fails immediately.
const RETRIABLE_STATUSES: &[u16] = &[429, 500, 502, 503, 504];

// ============================================================================
// Transport Trait
// ============================================================================

/// One raw HTTP exchange, before any classification.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body text
    pub body: String,
}

/// Trait for executing a single HTTP GET attempt.
///
/// This abstraction keeps the retry/cancellation policy testable
/// without a network. Implement it to put a custom transport under
/// `GiphyClient`; production code uses `ReqwestTransport`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one GET request and return the raw response.
    ///
    /// Errors from this method are transport-level failures and are
    /// always considered retriable by the caller.
    async fn execute(&self, url: &Url) -> GiphyResult<RawResponse>;
}

// ============================================================================
// Reqwest Transport
// ============================================================================

/// Production transport using reqwest.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a new reqwest transport with the given user agent.
    ///
    /// No per-request timeout is set here; the whole-call budget is
    /// enforced by `HttpClient` so that it covers retries and backoff
    /// delays too.
    #[must_use]
    pub fn new(user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .expect("failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, url: &Url) -> GiphyResult<RawResponse> {
        let response = self
            .client
            .get(url.as_str())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| GiphyError::Network {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| GiphyError::Network {
            message: e.to_string(),
        })?;

        Ok(RawResponse { status, body })
    }
}

// ============================================================================
// Request Execution Policy
// ============================================================================

/// Transport wrapper implementing the shared request execution policy.
///
/// All three client operations funnel through `get_json`.
pub(crate) struct HttpClient<T: Transport> {
    transport: T,
    max_attempts: u32,
    retry_base_delay: Duration,
    request_timeout: Duration,
}

impl<T: Transport> HttpClient<T> {
    /// Create a new policy wrapper around a transport.
    pub fn new(transport: T, config: &GiphyConfig) -> Self {
        Self {
            transport,
            max_attempts: config.max_attempts,
            retry_base_delay: config.retry_base_delay,
            request_timeout: config.request_timeout,
        }
    }

    /// Fetch JSON from a URL and deserialize it.
    ///
    /// The whole call - every attempt and the backoff delays between
    /// them - is bounded by the configured timeout. The timeout and the
    /// caller's token are combined into a single cancellation
    /// condition: either firing aborts the in-flight request, skips any
    /// remaining retries and yields `GiphyError::Cancelled`.
    pub async fn get_json<D: DeserializeOwned>(
        &self,
        url: &Url,
        cancel: &CancellationToken,
    ) -> GiphyResult<D> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(GiphyError::Cancelled),
            () = tokio::time::sleep(self.request_timeout) => Err(GiphyError::Cancelled),
            result = self.fetch_json(url) => result,
        }
    }

    async fn fetch_json<D: DeserializeOwned>(&self, url: &Url) -> GiphyResult<D> {
        let body = self.fetch_with_retry(url).await?;
        let value: Value = serde_json::from_str(&body)?;
        check_envelope_meta(&value)?;
        serde_json::from_value(value).map_err(Into::into)
    }

    /// Fetch a URL with automatic retry for transient failures.
    async fn fetch_with_retry(&self, url: &Url) -> GiphyResult<String> {
        let mut last_error: Option<GiphyError> = None;

        for attempt in 0..self.max_attempts {
            if attempt > 0 {
                let delay = self.retry_base_delay * 2u32.pow(attempt - 1);
                debug!(attempt, "retrying Giphy request after transient failure");
                tokio::time::sleep(delay).await;
            }

            match self.transport.execute(url).await {
                Ok(response) => {
                    if (200..300).contains(&response.status) {
                        return Ok(response.body);
                    }

                    let error = GiphyError::ApiRequestFailed {
                        status: response.status,
                        path: url.path().to_string(),
                    };

                    if RETRIABLE_STATUSES.contains(&response.status)
                        && attempt + 1 < self.max_attempts
                    {
                        last_error = Some(error);
                        continue;
                    }

                    // Non-retriable status or final attempt - fail immediately
                    return Err(error);
                }
                Err(e) => {
                    // Transport-level failures are retryable
                    if attempt + 1 < self.max_attempts {
                        last_error = Some(e);
                        continue;
                    }
                    return Err(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| GiphyError::InvalidResponse {
            message: "no request attempts were made".to_string(),
        }))
    }
}

/// Reject 2xx responses whose embedded `meta.status` reports a failure.
///
/// These are provider-logic errors, not transport errors, and are never
/// retried.
fn check_envelope_meta(value: &Value) -> GiphyResult<()> {
    if let Some(meta) = value.get("meta") {
        let status = meta
            .get("status")
            .and_then(Value::as_u64)
            .unwrap_or(200);
        if status != 200 {
            let message = meta
                .get("msg")
                .and_then(Value::as_str)
                .unwrap_or("API error")
                .to_string();
            #[allow(clippy::cast_possible_truncation)] // provider statuses are HTTP-sized
            return Err(GiphyError::ProviderRejected {
                status: status as u16,
                message,
            });
        }
    }
    Ok(())
}

// ============================================================================
// Fake Transport for Testing
// ============================================================================
