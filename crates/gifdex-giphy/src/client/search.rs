//! Search operation for the Giphy client.

use crate::error::GiphyResult;
use crate::http::Transport;
use crate::models::SearchEnvelope;
use crate::parsing::map_records;
use crate::url::build_search_url;
use gifdex_core::{SearchPage, SearchRequest};
use tokio_util::sync::CancellationToken;

use super::GiphyClient;

impl<T: Transport> GiphyClient<T> {
    /// Search the catalog, returning one page of mapped items.
    ///
    /// `has_more` and `next_offset` are derived from the provider's
    /// pagination block rather than taken verbatim. Empty query text is
    /// passed through; the provider answers it with an empty page.
    pub(crate) async fn search_page(
        &self,
        request: &SearchRequest,
        cancel: &CancellationToken,
    ) -> GiphyResult<SearchPage> {
        let url = build_search_url(&self.config, self.api_key()?, request);
        let envelope: SearchEnvelope = self.http.get_json(&url, cancel).await?;

        let pagination = envelope.pagination;
        let next_offset = pagination.offset + pagination.count;

        Ok(SearchPage {
            items: map_records(&envelope.data),
            total_count: pagination.total_count,
            has_more: next_offset < pagination.total_count,
            next_offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{fake_gif_json, test_client};
    use crate::error::GiphyError;
    use crate::http::testing::{FakeTransport, http_status, ok_json};
    use serde_json::json;

    fn search_response(
        ids: &[&str],
        total_count: u64,
        offset: u64,
    ) -> serde_json::Value {
        json!({
            "data": ids.iter().map(|id| fake_gif_json(id)).collect::<Vec<_>>(),
            "pagination": {
                "total_count": total_count,
                "count": ids.len(),
                "offset": offset
            },
            "meta": {"status": 200, "msg": "OK"}
        })
    }

    #[tokio::test]
    async fn test_search_maps_items_in_provider_order() {
        let transport = FakeTransport::new()
            .with_response("search", ok_json(200, &search_response(&["a", "b"], 100, 0)));
        let client = test_client(transport.clone());

        let page = client
            .search_page(&SearchRequest::new("cats"), &CancellationToken::new())
            .await
            .unwrap();

        let ids: Vec<&str> = page.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(page.items[0].title, "Sample a");

        // All paging and filter parameters plus the credential are sent
        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].contains("q=cats"));
        assert!(calls[0].contains("limit=24"));
        assert!(calls[0].contains("rating=g"));
        assert!(calls[0].contains("lang=en"));
        assert!(calls[0].contains("api_key=test-key"));
    }

    #[tokio::test]
    async fn test_pagination_is_derived_not_copied() {
        let transport = FakeTransport::new()
            .with_response("search", ok_json(200, &search_response(&["a", "b"], 100, 48)));
        let client = test_client(transport);

        let page = client
            .search_page(
                &SearchRequest::new("cats").with_offset(48),
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(page.total_count, 100);
        assert_eq!(page.next_offset, 50);
        assert!(page.has_more);
    }

    #[tokio::test]
    async fn test_last_page_has_no_more() {
        let transport = FakeTransport::new()
            .with_response("search", ok_json(200, &search_response(&["a", "b"], 50, 48)));
        let client = test_client(transport);

        let page = client
            .search_page(
                &SearchRequest::new("cats").with_offset(48),
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(page.next_offset, 50);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn test_empty_query_is_permitted() {
        let transport = FakeTransport::new()
            .with_response("search", ok_json(200, &search_response(&[], 0, 0)));
        let client = test_client(transport);

        let page = client
            .search_page(&SearchRequest::new(""), &CancellationToken::new())
            .await
            .unwrap();

        assert!(page.items.is_empty());
        assert!(!page.has_more);
        assert_eq!(page.next_offset, 0);
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_any_network_call() {
        let transport = FakeTransport::new()
            .with_response("search", ok_json(200, &search_response(&["a"], 1, 0)));
        let client = crate::client::GiphyClient::with_parts(
            crate::models::GiphyConfig::default(),
            transport.clone(),
            crate::client::tests::test_cache(),
        );

        let result = client
            .search_page(&SearchRequest::new("cats"), &CancellationToken::new())
            .await;

        assert!(matches!(result, Err(GiphyError::MissingApiKey)));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_search_surfaces_provider_failure() {
        let transport = FakeTransport::new().with_response("search", http_status(404));
        let client = test_client(transport);

        let result = client
            .search_page(&SearchRequest::new("cats"), &CancellationToken::new())
            .await;

        assert!(matches!(
            result,
            Err(GiphyError::ApiRequestFailed { status: 404, .. })
        ));
    }
}
