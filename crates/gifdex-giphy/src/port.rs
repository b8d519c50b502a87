//! `CatalogPort` implementation for the Giphy client.
//!
//! The client's internal error taxonomy is collapsed into the
//! port-level `CatalogError` here, at the boundary, so the rest of the
//! crate never has to think about what callers see.

use crate::client::GiphyClient;
use crate::error::GiphyError;
use crate::http::Transport;
use async_trait::async_trait;
use gifdex_core::{
    CatalogError, CatalogItem, CatalogPort, CatalogResult, SearchPage, SearchRequest,
};
use tokio_util::sync::CancellationToken;

#[async_trait]
impl<T: Transport> CatalogPort for GiphyClient<T> {
    async fn search(
        &self,
        request: &SearchRequest,
        cancel: &CancellationToken,
    ) -> CatalogResult<SearchPage> {
        self.search_page(request, cancel).await.map_err(map_error)
    }

    async fn get_by_id(&self, id: &str, cancel: &CancellationToken) -> CatalogResult<CatalogItem> {
        self.item_by_id(id, cancel).await.map_err(map_error)
    }

    async fn get_by_ids(
        &self,
        ids: &[String],
        cancel: &CancellationToken,
    ) -> CatalogResult<Vec<CatalogItem>> {
        self.items_by_ids(ids, cancel).await.map_err(map_error)
    }
}

fn map_error(error: GiphyError) -> CatalogError {
    match error {
        GiphyError::MissingApiKey => CatalogError::Configuration {
            message: "Giphy API key is required".to_string(),
        },
        GiphyError::Cancelled => CatalogError::Cancelled,
        GiphyError::ApiRequestFailed { status, .. } if status == 401 || status == 403 => {
            CatalogError::Unauthorized { status }
        }
        GiphyError::ApiRequestFailed { status: 429, .. } => CatalogError::RateLimited,
        GiphyError::ApiRequestFailed { status, path } => CatalogError::Provider {
            status: Some(status),
            message: format!("request to {path} failed with status {status}"),
        },
        GiphyError::ProviderRejected { status, message } => CatalogError::Provider {
            status: Some(status),
            message,
        },
        GiphyError::Network { message } => CatalogError::Network { message },
        GiphyError::JsonParse(e) => CatalogError::InvalidResponse {
            message: e.to_string(),
        },
        GiphyError::InvalidResponse { message } => CatalogError::InvalidResponse { message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(status: u16) -> GiphyError {
        GiphyError::ApiRequestFailed {
            status,
            path: "/v1/gifs/search".to_string(),
        }
    }

    #[test]
    fn test_missing_key_maps_to_configuration() {
        assert!(matches!(
            map_error(GiphyError::MissingApiKey),
            CatalogError::Configuration { .. }
        ));
    }

    #[test]
    fn test_cancelled_maps_to_cancelled() {
        let mapped = map_error(GiphyError::Cancelled);
        assert!(mapped.is_cancelled());
    }

    #[test]
    fn test_auth_statuses_map_to_unauthorized() {
        assert!(matches!(
            map_error(failed(401)),
            CatalogError::Unauthorized { status: 401 }
        ));
        assert!(matches!(
            map_error(failed(403)),
            CatalogError::Unauthorized { status: 403 }
        ));
    }

    #[test]
    fn test_rate_limit_maps_to_rate_limited() {
        let mapped = map_error(failed(429));
        assert!(matches!(mapped, CatalogError::RateLimited));
        assert_eq!(mapped.status(), Some(429));
    }

    #[test]
    fn test_other_statuses_map_to_provider() {
        let mapped = map_error(failed(503));
        match mapped {
            CatalogError::Provider { status, message } => {
                assert_eq!(status, Some(503));
                assert!(message.contains("/v1/gifs/search"));
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[test]
    fn test_envelope_rejection_keeps_provider_message() {
        let mapped = map_error(GiphyError::ProviderRejected {
            status: 414,
            message: "URI Too Long".to_string(),
        });
        assert!(matches!(
            mapped,
            CatalogError::Provider { status: Some(414), .. }
        ));
    }

    #[test]
    fn test_network_and_parse_failures() {
        assert!(matches!(
            map_error(GiphyError::Network {
                message: "connection reset".to_string()
            }),
            CatalogError::Network { .. }
        ));

        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(
            map_error(GiphyError::JsonParse(parse)),
            CatalogError::InvalidResponse { .. }
        ));
    }
}
