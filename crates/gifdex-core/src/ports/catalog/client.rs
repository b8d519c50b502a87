//! Catalog client port trait.

use super::error::CatalogResult;
use super::types::{CatalogItem, SearchPage, SearchRequest};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Port trait for GIF catalog operations.
///
/// This trait defines the interface the core domain uses to talk to an
/// external catalog. The Giphy implementation lives in `gifdex-giphy`.
///
/// # Design
///
/// - Uses core-owned DTOs, not provider API types
/// - Returns `CatalogError` for all failures
/// - Every operation takes a `CancellationToken`; triggering it aborts
///   the in-flight call promptly and the operation resolves to
///   `CatalogError::Cancelled`
/// - Two independent concurrent calls have no ordering guarantee;
///   callers wanting only-the-latest semantics must cancel the
///   superseded call themselves
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Search the catalog, returning one page of results.
    async fn search(
        &self,
        request: &SearchRequest,
        cancel: &CancellationToken,
    ) -> CatalogResult<SearchPage>;

    /// Fetch a single item by identifier, consulting the adapter's
    /// cache first.
    async fn get_by_id(&self, id: &str, cancel: &CancellationToken) -> CatalogResult<CatalogItem>;

    /// Fetch many items by identifier.
    ///
    /// Duplicate ids are dropped (first occurrence wins) and the output
    /// preserves the deduplicated input order regardless of cache
    /// state. Ids the provider cannot resolve are absent from the
    /// output; the call does not fail on partial misses.
    async fn get_by_ids(
        &self,
        ids: &[String],
        cancel: &CancellationToken,
    ) -> CatalogResult<Vec<CatalogItem>>;
}
