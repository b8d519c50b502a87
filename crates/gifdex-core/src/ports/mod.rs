//! Port definitions for gifdex.
//!
//! Ports are the seams between the core domain and the outside world.
//! Each port owns its DTOs and error type; implementations live in
//! adapter crates.

pub mod catalog;
pub mod kv_store;

pub use catalog::{
    CatalogError, CatalogItem, CatalogPort, CatalogResult, SearchPage, SearchRequest, Uploader,
};
pub use kv_store::{KvStore, KvStoreError, MemoryKvStore, NoopKvStore};
