//! Two-tier item cache with a fixed time-to-live.
//!
//! Tier one is a process-lifetime map; tier two is whatever `KvStore`
//! the host supplies (session storage in a browser deployment). Entries
//! older than the TTL are treated as absent on read but are not
//! proactively evicted - they stay until overwritten or until the store
//! is cleared externally.
//!
//! Reads and writes are not atomic across tiers or callers: two
//! concurrent misses for the same id may both fetch and both write,
//! and the last write wins. That race is accepted; the stakes are a
//! redundant fetch. Store failures are swallowed - the persisted tier
//! is an optimization, not a durability guarantee.

use gifdex_core::{CatalogItem, KvStore};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Cache keys are namespaced by item identifier only, not by query.
const CACHE_KEY_PREFIX: &str = "gif:";

/// Millisecond wall-clock source, injectable for TTL tests.
pub(crate) trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}

/// Wall clock backed by `SystemTime`.
pub(crate) struct SystemClock;

impl Clock for SystemClock {
    #[allow(clippy::cast_possible_truncation)] // millis since epoch fit u64 for millennia
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// A cached item paired with its capture timestamp. This is also the
/// JSON shape written to the session tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    item: CatalogItem,
    ts: u64,
}

/// Two-tier TTL cache keyed by item identifier.
pub(crate) struct ItemCache {
    ttl_ms: u64,
    memory: Mutex<HashMap<String, CacheEntry>>,
    session: Arc<dyn KvStore>,
    clock: Arc<dyn Clock>,
}

impl ItemCache {
    /// Create a cache over the given session store.
    pub fn new(session: Arc<dyn KvStore>, ttl: Duration) -> Self {
        Self::with_clock(session, ttl, Arc::new(SystemClock))
    }

    /// Create a cache with an explicit clock.
    #[allow(clippy::cast_possible_truncation)] // TTLs are minutes, not millennia
    pub fn with_clock(session: Arc<dyn KvStore>, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl_ms: ttl.as_millis() as u64,
            memory: Mutex::new(HashMap::new()),
            session,
            clock,
        }
    }

    /// Look up a live entry, memory tier first, then the session store.
    /// Stale entries are treated as absent.
    pub fn get(&self, id: &str) -> Option<CatalogItem> {
        let key = cache_key(id);
        let now = self.clock.now_millis();

        if let Some(item) = self
            .memory
            .lock()
            .ok()
            .and_then(|memory| memory.get(&key).filter(|e| self.is_live(e, now)).map(|e| e.item.clone()))
        {
            return Some(item);
        }

        let raw = self.session.read(&key).ok().flatten()?;
        let entry: CacheEntry = serde_json::from_str(&raw).ok()?;
        self.is_live(&entry, now).then_some(entry.item)
    }

    /// Store an item in both tiers, stamped with the current time.
    /// Session-tier failures are swallowed.
    pub fn put(&self, item: &CatalogItem) {
        let key = cache_key(&item.id);
        let entry = CacheEntry {
            item: item.clone(),
            ts: self.clock.now_millis(),
        };

        match serde_json::to_string(&entry) {
            Ok(json) => {
                if let Err(e) = self.session.write(&key, &json) {
                    debug!(id = %item.id, error = %e, "session cache write failed");
                }
            }
            Err(e) => debug!(id = %item.id, error = %e, "cache entry serialization failed"),
        }

        if let Ok(mut memory) = self.memory.lock() {
            memory.insert(key, entry);
        }
    }

    fn is_live(&self, entry: &CacheEntry, now: u64) -> bool {
        now.saturating_sub(entry.ts) <= self.ttl_ms
    }
}

fn cache_key(id: &str) -> String {
    format!("{CACHE_KEY_PREFIX}{id}")
}
