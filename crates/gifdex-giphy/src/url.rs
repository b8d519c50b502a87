//! URL construction helpers for the Giphy API.
//!
//! Pure functions building absolute request URLs from the configured
//! base, ensuring consistent construction across all API calls. The
//! API key is always the last query parameter appended; callers must
//! have already established that one is configured.

use crate::models::GiphyConfig;
use gifdex_core::SearchRequest;
use url::Url;

/// Build the search endpoint URL with all paging and filter parameters.
pub(crate) fn build_search_url(config: &GiphyConfig, api_key: &str, request: &SearchRequest) -> Url {
    let mut url = endpoint_url(config, Some("search"));
    url.query_pairs_mut()
        .append_pair("q", &request.query)
        .append_pair("limit", &request.limit.to_string())
        .append_pair("offset", &request.offset.to_string())
        .append_pair("rating", &request.rating)
        .append_pair("lang", &request.lang)
        .append_pair("api_key", api_key);
    url
}

/// Build the single-item endpoint URL (base path suffixed by the id).
pub(crate) fn build_item_url(config: &GiphyConfig, api_key: &str, id: &str) -> Url {
    let mut url = endpoint_url(config, Some(id));
    url.query_pairs_mut().append_pair("api_key", api_key);
    url
}

/// Build the batch endpoint URL carrying a comma-joined id list.
pub(crate) fn build_batch_url(config: &GiphyConfig, api_key: &str, ids: &[&str]) -> Url {
    let mut url = endpoint_url(config, None);
    url.query_pairs_mut()
        .append_pair("ids", &ids.join(","))
        .append_pair("api_key", api_key);
    url
}

fn endpoint_url(config: &GiphyConfig, segment: Option<&str>) -> Url {
    let mut url = config.base_url.clone();
    if let Some(segment) = segment {
        let base_path = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{base_path}/{segment}"));
    }
    url
}
