//! Key-value cache store boundary and the in-memory reference implementation.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use crate::error::{CacheError, CacheResult};

/// Key-value store with per-entry expiry.
///
/// Values are opaque serialized payloads; [`CacheAside`](crate::cache::CacheAside)
/// owns their encoding. Expiry is passive — implementations ignore entries
/// past their deadline instead of running an eviction loop.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Fetch the stored value for `key`; `None` when absent or expired.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Store `value` under `key` for `ttl`, replacing any existing entry.
    async fn set(&self, key: &str, value: String, ttl: Duration) -> CacheResult<()>;
}

/// A stored value with its expiry deadline.
#[derive(Debug, Clone)]
struct StoredEntry {
    value: String,
    expires_at: Instant,
}

/// Thread-safe in-memory cache store with per-entry TTL.
///
/// Cheap to clone (shares the underlying map). Expired entries are ignored
/// by `get` and stay in the map until replaced or [`purge_expired`] runs.
///
/// [`purge_expired`]: MemoryCacheStore::purge_expired
#[derive(Clone, Default)]
pub struct MemoryCacheStore {
    entries: Arc<RwLock<HashMap<String, StoredEntry>>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Remove a specific key from the store.
    pub fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }

    /// Clear all entries from the store.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    /// Drop entries past their deadline.
    ///
    /// Not required for correctness; `get` already ignores expired entries.
    pub fn purge_expired(&self) {
        let now = Instant::now();

        if let Ok(mut entries) = self.entries.write() {
            entries.retain(|_, entry| now < entry.expires_at);
        }
    }

    /// Number of entries in the store (including expired ones).
    pub fn len(&self) -> usize {
        if let Ok(entries) = self.entries.read() {
            entries.len()
        } else {
            0
        }
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| CacheError::Unavailable("cache lock poisoned".to_string()))?;

        Ok(entries
            .get(key)
            .filter(|entry| Instant::now() < entry.expires_at)
            .map(|entry| entry.value.clone()))
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> CacheResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CacheError::Unavailable("cache lock poisoned".to_string()))?;

        entries.insert(
            key.to_string(),
            StoredEntry {
                value,
                expires_at: Instant::now() + ttl,
            },
        );

        Ok(())
    }
}

impl std::fmt::Debug for MemoryCacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCacheStore")
            .field("entries", &self.len())
            .finish()
    }
}
