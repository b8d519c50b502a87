//! Mapping from raw Giphy records to `CatalogItem` values.
//!
//! A deterministic, pure function of one provider record. Items are
//! created here and nowhere else.

use crate::models::{GiphyGif, GiphyImage, GiphyUser};
use gifdex_core::{CatalogItem, Uploader};

/// The provider's "unknown" sentinel for `import_datetime`.
const ZERO_DATETIME: &str = "0000-00-00 00:00:00";

/// Map one provider record into a catalog item.
pub(crate) fn map_record(record: &GiphyGif) -> CatalogItem {
    let images = &record.images;

    let original_url = images
        .original
        .as_ref()
        .map(|img| img.url.clone())
        .unwrap_or_default();

    // Prefer the lighter variants for grid rendering; fall back towards
    // the full-size original.
    let preview_url = first_url(&[
        images.preview_webp.as_ref(),
        images.fixed_width_small_still.as_ref(),
        images.preview_gif.as_ref(),
        images.fixed_height_small_still.as_ref(),
        images.fixed_height.as_ref(),
        images.original.as_ref(),
    ])
    .unwrap_or_else(|| original_url.clone());

    let (width, height, size_bytes) = images.original.as_ref().map_or((None, None, None), |img| {
        (
            parse_number(&img.width),
            parse_number(&img.height),
            img.size.as_deref().and_then(parse_number),
        )
    });

    CatalogItem {
        id: record.id.clone(),
        title: display_title(record),
        slug: record.slug.clone(),
        page_url: record.url.clone(),
        preview_url,
        original_url,
        width,
        height,
        size_bytes,
        rating: record.rating.clone(),
        created_at: normalize_created_at(record.import_datetime.as_deref()),
        source_url: record
            .source
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        uploader: record.user.as_ref().map(map_uploader),
        tags: record.tags.clone(),
    }
}

/// Map a batch of provider records, preserving their order.
pub(crate) fn map_records(records: &[GiphyGif]) -> Vec<CatalogItem> {
    records.iter().map(map_record).collect()
}

fn display_title(record: &GiphyGif) -> String {
    let trimmed = record.title.trim();
    if !trimmed.is_empty() {
        trimmed.to_string()
    } else if record.slug.is_empty() {
        "Untitled".to_string()
    } else {
        record.slug.replace('-', " ")
    }
}

/// First candidate with a non-empty URL wins.
fn first_url(candidates: &[Option<&GiphyImage>]) -> Option<String> {
    candidates
        .iter()
        .flatten()
        .find(|img| !img.url.is_empty())
        .map(|img| img.url.clone())
}

/// Parse a wire-format number. Values that do not parse become absent
/// rather than zero or an error.
fn parse_number(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

fn normalize_created_at(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.is_empty() && *s != ZERO_DATETIME)
        .map(str::to_string)
}

fn map_uploader(user: &GiphyUser) -> Uploader {
    Uploader {
        username: user.username.clone(),
        display_name: user.display_name.clone(),
        profile_url: user.profile_url.clone(),
        avatar_url: user.avatar_url.clone(),
        verified: user.is_verified,
    }
}
