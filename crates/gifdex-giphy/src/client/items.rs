//! Item fetch operations for the Giphy client.
//!
//! Both operations consult the two-tier cache before the network and
//! write every freshly fetched item back into both tiers.

use crate::error::GiphyResult;
use crate::http::Transport;
use crate::models::{ItemEnvelope, ListEnvelope};
use crate::parsing::{map_record, map_records};
use crate::url::{build_batch_url, build_item_url};
use gifdex_core::CatalogItem;
use std::collections::{HashMap, HashSet};
use tokio_util::sync::CancellationToken;

use super::GiphyClient;

impl<T: Transport> GiphyClient<T> {
    /// Fetch one item by id, from cache when live.
    pub(crate) async fn item_by_id(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> GiphyResult<CatalogItem> {
        if let Some(hit) = self.cache.get(id) {
            return Ok(hit);
        }

        let item = self.fetch_one(id, cancel).await?;
        self.cache.put(&item);
        Ok(item)
    }

    /// Fetch many items by id.
    ///
    /// Duplicate ids are dropped up front; the first-occurrence order
    /// is the canonical output order regardless of which ids were cache
    /// hits. A single miss uses the cheaper single-item endpoint; two
    /// or more misses go through the batch endpoint, which returns
    /// whatever subset it still has - unresolved ids are simply absent
    /// from the output.
    pub(crate) async fn items_by_ids(
        &self,
        ids: &[String],
        cancel: &CancellationToken,
    ) -> GiphyResult<Vec<CatalogItem>> {
        let mut unique: Vec<&str> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        for id in ids {
            if seen.insert(id.as_str()) {
                unique.push(id.as_str());
            }
        }
        if unique.is_empty() {
            return Ok(Vec::new());
        }

        let mut by_id: HashMap<String, CatalogItem> = HashMap::new();
        let mut misses: Vec<&str> = Vec::new();
        for id in &unique {
            match self.cache.get(id) {
                Some(item) => {
                    by_id.insert((*id).to_string(), item);
                }
                None => misses.push(id),
            }
        }

        let fetched: Vec<CatalogItem> = match misses.as_slice() {
            [] => Vec::new(),
            [only] => vec![self.fetch_one(only, cancel).await?],
            many => {
                let url = build_batch_url(&self.config, self.api_key()?, many);
                let envelope: ListEnvelope = self.http.get_json(&url, cancel).await?;
                map_records(&envelope.data)
            }
        };

        for item in fetched {
            self.cache.put(&item);
            by_id.insert(item.id.clone(), item);
        }

        Ok(unique
            .iter()
            .filter_map(|id| by_id.remove(*id))
            .collect())
    }

    async fn fetch_one(&self, id: &str, cancel: &CancellationToken) -> GiphyResult<CatalogItem> {
        let url = build_item_url(&self.config, self.api_key()?, id);
        let envelope: ItemEnvelope = self.http.get_json(&url, cancel).await?;
        Ok(map_record(&envelope.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{Clock, ItemCache};
    use crate::client::tests::{fake_gif_json, test_client, test_config};
    use crate::error::GiphyError;
    use crate::http::testing::{FakeTransport, http_status, ok_json};
    use gifdex_core::MemoryKvStore;
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::Duration;

    fn item_response(id: &str) -> serde_json::Value {
        json!({
            "data": fake_gif_json(id),
            "meta": {"status": 200, "msg": "OK"}
        })
    }

    fn batch_response(ids: &[&str]) -> serde_json::Value {
        json!({
            "data": ids.iter().map(|id| fake_gif_json(id)).collect::<Vec<_>>(),
            "meta": {"status": 200, "msg": "OK"}
        })
    }

    struct ManualClock(AtomicU64);

    impl ManualClock {
        fn new() -> Arc<Self> {
            Arc::new(Self(AtomicU64::new(1_000_000)))
        }

        fn advance(&self, delta: Duration) {
            #[allow(clippy::cast_possible_truncation)]
            self.0.fetch_add(delta.as_millis() as u64, Ordering::SeqCst);
        }
    }

    impl Clock for ManualClock {
        fn now_millis(&self) -> u64 {
            self.0.load(Ordering::SeqCst)
        }
    }

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    #[tokio::test]
    async fn test_get_by_id_fetches_and_maps() {
        let transport = FakeTransport::new().with_response("abc", ok_json(200, &item_response("abc")));
        let client = test_client(transport.clone());

        let item = client
            .item_by_id("abc", &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(item.id, "abc");
        assert_eq!(item.preview_url, "https://m.example/abc/preview.webp");
        assert!(transport.calls()[0].contains("/v1/gifs/abc?"));
    }

    #[tokio::test]
    async fn test_get_by_id_hits_cache_within_ttl() {
        let transport = FakeTransport::new().with_response("abc", ok_json(200, &item_response("abc")));
        let client = test_client(transport.clone());
        let cancel = CancellationToken::new();

        let first = client.item_by_id("abc", &cancel).await.unwrap();
        let second = client.item_by_id("abc", &cancel).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_get_by_id_refetches_after_ttl_expiry() {
        let transport = FakeTransport::new().with_response("abc", ok_json(200, &item_response("abc")));
        let clock = ManualClock::new();
        let config = test_config();
        let cache = ItemCache::with_clock(
            Arc::new(MemoryKvStore::new()),
            config.cache_ttl,
            clock.clone(),
        );
        let client = GiphyClient::with_parts(config, transport.clone(), cache);
        let cancel = CancellationToken::new();

        client.item_by_id("abc", &cancel).await.unwrap();
        client.item_by_id("abc", &cancel).await.unwrap();
        assert_eq!(transport.call_count(), 1);

        clock.advance(Duration::from_secs(601));
        client.item_by_id("abc", &cancel).await.unwrap();
        assert_eq!(transport.call_count(), 2);
    }

    #[tokio::test]
    async fn test_get_by_id_not_found_carries_status() {
        let transport = FakeTransport::new().with_response("missing", http_status(404));
        let client = test_client(transport);

        let result = client
            .item_by_id("missing", &CancellationToken::new())
            .await;

        assert!(matches!(
            result,
            Err(GiphyError::ApiRequestFailed { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_get_by_ids_dedups_and_preserves_first_occurrence_order() {
        // Provider answers in a different order than requested
        let transport =
            FakeTransport::new().with_response("ids=", ok_json(200, &batch_response(&["c", "a", "b"])));
        let client = test_client(transport.clone());

        let items = client
            .items_by_ids(&ids(&["a", "b", "a", "c"]), &CancellationToken::new())
            .await
            .unwrap();

        let got: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(got, vec!["a", "b", "c"]);
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_get_by_ids_empty_input_is_empty_output() {
        let transport = FakeTransport::new();
        let client = test_client(transport.clone());

        let items = client
            .items_by_ids(&[], &CancellationToken::new())
            .await
            .unwrap();

        assert!(items.is_empty());
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_get_by_ids_single_miss_uses_item_endpoint() {
        let transport = FakeTransport::new()
            .with_response("/v1/gifs/a?", ok_json(200, &item_response("a")))
            .with_response("/v1/gifs/b?", ok_json(200, &item_response("b")));
        let client = test_client(transport.clone());
        let cancel = CancellationToken::new();

        // Warm the cache with "a"
        client.item_by_id("a", &cancel).await.unwrap();

        let items = client.items_by_ids(&ids(&["a", "b"]), &cancel).await.unwrap();

        let got: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(got, vec!["a", "b"]);

        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        // The second call went to the single-item endpoint, not batch
        assert!(calls[1].contains("/v1/gifs/b?"));
        assert!(!calls[1].contains("ids="));
    }

    #[tokio::test]
    async fn test_get_by_ids_multiple_misses_use_batch_endpoint() {
        let transport =
            FakeTransport::new().with_response("ids=", ok_json(200, &batch_response(&["a", "b"])));
        let client = test_client(transport.clone());

        client
            .items_by_ids(&ids(&["a", "b"]), &CancellationToken::new())
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].contains("ids=a%2Cb"));
    }

    #[tokio::test]
    async fn test_get_by_ids_all_hits_skip_network() {
        let transport = FakeTransport::new()
            .with_response("ids=", ok_json(200, &batch_response(&["a", "b"])));
        let client = test_client(transport.clone());
        let cancel = CancellationToken::new();

        client.items_by_ids(&ids(&["a", "b"]), &cancel).await.unwrap();
        assert_eq!(transport.call_count(), 1);

        // Second call is fully served from cache
        let items = client.items_by_ids(&ids(&["b", "a"]), &cancel).await.unwrap();
        let got: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(got, vec!["b", "a"]);
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_get_by_ids_tolerates_partial_batch_misses() {
        // "gone" was deleted upstream; the batch endpoint just omits it
        let transport =
            FakeTransport::new().with_response("ids=", ok_json(200, &batch_response(&["a"])));
        let client = test_client(transport);

        let items = client
            .items_by_ids(&ids(&["a", "gone"]), &CancellationToken::new())
            .await
            .unwrap();

        let got: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(got, vec!["a"]);
    }

    #[tokio::test]
    async fn test_get_by_ids_caches_fetched_items() {
        let transport =
            FakeTransport::new().with_response("ids=", ok_json(200, &batch_response(&["a", "b"])));
        let client = test_client(transport.clone());
        let cancel = CancellationToken::new();

        client.items_by_ids(&ids(&["a", "b"]), &cancel).await.unwrap();

        // Both ids now served from cache by the single-item operation
        client.item_by_id("a", &cancel).await.unwrap();
        client.item_by_id("b", &cancel).await.unwrap();
        assert_eq!(transport.call_count(), 1);
    }
}
