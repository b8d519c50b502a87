//! Catalog client port definitions.
//!
//! This module defines the port trait and DTOs for GIF catalog access.
//! The Giphy implementation lives in `gifdex-giphy`.

mod client;
mod error;
mod types;

pub use client::CatalogPort;
pub use error::{CatalogError, CatalogResult};
pub use types::{CatalogItem, SearchPage, SearchRequest, Uploader};
