//! Core-owned DTOs for catalog operations.
//!
//! These types cross the boundary between provider adapters and
//! consumers. They contain only the data the core domain cares about,
//! not raw provider API details.

use serde::{Deserialize, Serialize};

/// One normalized GIF record from the catalog.
///
/// Immutable once constructed; adapters create these from provider
/// records and never mutate them afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Provider-assigned identifier, stable and unique within the
    /// provider's namespace.
    pub id: String,
    /// Display title (never empty; adapters fall back to the slug or a
    /// placeholder).
    pub title: String,
    /// URL slug
    pub slug: String,
    /// Canonical page URL on the provider's site
    pub page_url: String,
    /// Smallest variant URL acceptable for grid rendering
    pub preview_url: String,
    /// Full-resolution variant URL
    pub original_url: String,
    /// Width in pixels, if the provider reported a parsable value
    pub width: Option<u64>,
    /// Height in pixels, if the provider reported a parsable value
    pub height: Option<u64>,
    /// Size in bytes, if the provider reported a parsable value
    pub size_bytes: Option<u64>,
    /// Content rating (e.g. "g", "pg")
    pub rating: String,
    /// Creation timestamp as reported by the provider; `None` when the
    /// provider sent its all-zero "unknown" sentinel
    pub created_at: Option<String>,
    /// Source URL the GIF was imported from
    pub source_url: Option<String>,
    /// Uploader metadata, when the provider supplied one
    pub uploader: Option<Uploader>,
    /// Tag list, when the provider supplied one
    pub tags: Option<Vec<String>>,
}

/// Uploader metadata attached to a catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Uploader {
    /// Account username
    pub username: Option<String>,
    /// Human-readable display name
    pub display_name: Option<String>,
    /// Profile page URL
    pub profile_url: Option<String>,
    /// Avatar image URL
    pub avatar_url: Option<String>,
    /// Whether the account is verified
    pub verified: Option<bool>,
}

/// Parameters for a catalog search. Stateless, constructed per call.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// Query text. Empty text is permitted; the provider simply returns
    /// an empty page.
    pub query: String,
    /// Page size (default 24)
    pub limit: u32,
    /// Result offset (default 0)
    pub offset: u64,
    /// Content-rating filter (default "g")
    pub rating: String,
    /// Language code (default "en")
    pub lang: String,
}

impl SearchRequest {
    /// Create a search request with default paging and filters.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: 24,
            offset: 0,
            rating: "g".to_string(),
            lang: "en".to_string(),
        }
    }

    /// Set the page size.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the result offset.
    #[must_use]
    pub const fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the content-rating filter.
    #[must_use]
    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = rating.into();
        self
    }

    /// Set the language code.
    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }
}

/// One page of search results.
///
/// `has_more` and `next_offset` are derived from the provider's
/// pagination block, never taken verbatim:
/// `next_offset = offset + count` and `has_more` is true iff
/// `next_offset < total_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    /// Items in provider response order
    pub items: Vec<CatalogItem>,
    /// Total result count reported by the provider
    pub total_count: u64,
    /// Whether another page is available
    pub has_more: bool,
    /// Offset to request for the next page
    pub next_offset: u64,
}
