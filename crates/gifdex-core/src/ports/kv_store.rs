//! Key/value store capability.
//!
//! Adapters use this for their session-scoped cache tier. In a browser
//! deployment the backing store is session storage; elsewhere any
//! key/value store (or nothing at all) will do. The store is purely an
//! optimization: callers must treat every failure as best-effort and
//! never let it surface as an operation failure.

use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

/// Error from a key/value store operation.
#[derive(Debug, Error)]
#[error("key/value store error: {message}")]
pub struct KvStoreError {
    /// Description of the failure
    pub message: String,
}

impl KvStoreError {
    /// Create a new store error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Minimal string key/value capability.
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>, KvStoreError>;

    /// Store `value` under `key`, overwriting any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), KvStoreError>;
}

/// Process-lifetime in-memory store.
///
/// The default backing for non-browser targets and tests.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKvStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn read(&self, key: &str) -> Result<Option<String>, KvStoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| KvStoreError::new("store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), KvStoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| KvStoreError::new("store lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store that persists nothing. Reads always miss, writes succeed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopKvStore;

impl KvStore for NoopKvStore {
    fn read(&self, _key: &str) -> Result<Option<String>, KvStoreError> {
        Ok(None)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), KvStoreError> {
        Ok(())
    }
}
