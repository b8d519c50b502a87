#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod ports;

// Re-export commonly used types for convenience
pub use ports::{
    CatalogError, CatalogItem, CatalogPort, CatalogResult, KvStore, KvStoreError, MemoryKvStore,
    NoopKvStore, SearchPage, SearchRequest, Uploader,
};
