//! Get-or-populate read path over a [`CacheStore`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::CacheStore;
use crate::error::CacheError;

/// Cache-aside reader: check the store first, populate it on a miss.
///
/// Concurrent misses for the same key are not coordinated — each caller runs
/// the producer and writes its own result, last write wins. Values cached
/// here are idempotent reads of external or local state, so the relaxation
/// trades duplicate work for zero added read latency. Store failures
/// propagate to the caller.
#[derive(Clone)]
pub struct CacheAside {
    store: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl CacheAside {
    /// Create a reader over `store` with a fixed entry TTL.
    pub fn new(store: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Return the cached value for `key`, or run `producer`, cache its
    /// result, and return it.
    ///
    /// A cached payload that no longer deserializes is treated as a miss
    /// and recomputed.
    pub async fn get_or_compute<T, E, F, Fut>(&self, key: &str, producer: F) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        E: From<CacheError>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(raw) = self.store.get(key).await.map_err(E::from)? {
            match serde_json::from_str(&raw) {
                Ok(value) => {
                    tracing::debug!(key, "cache hit");
                    return Ok(value);
                }
                Err(err) => {
                    tracing::warn!(key, error = %err, "cached payload no longer decodes, recomputing");
                }
            }
        }

        tracing::debug!(key, "cache miss");
        let value = producer().await?;

        let raw = serde_json::to_string(&value).map_err(|e| E::from(CacheError::Codec(e)))?;
        self.store.set(key, raw, self.ttl).await.map_err(E::from)?;

        Ok(value)
    }

    /// Entry TTL used for populated values.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
