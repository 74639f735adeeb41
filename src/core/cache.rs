//! TTL-bounded persistent cache for currency rates.
//!
//! A single slot holds the whole rate snapshot and is overwritten wholesale on
//! refresh. The backing store and the clock are injected capabilities, which
//! keeps expiry-boundary behavior deterministic under test.

use crate::core::clock::Clock;
use crate::core::currency::CurrencyRate;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Name of the one slot the cache occupies in the backing store.
pub const STORAGE_KEY: &str = "currencyData";

/// Cached rates go stale after one hour.
const CACHE_TTL_SECS: i64 = 60 * 60;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not serialize cached rates: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("cache backend rejected the write: {0}")]
    Backend(String),
}

/// A single string-keyed slot in a key-value store.
///
/// Reads fail soft: a backend that cannot produce the value reports `None`.
/// Writes report failure so the caller can decide whether to care.
#[async_trait]
pub trait KeyValueSlot: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;
    async fn put(&self, key: &str, value: String) -> Result<(), StorageError>;
    async fn remove(&self, key: &str);
}

/// One rate snapshot with its freshness window. `expires_at` is always
/// `timestamp + TTL`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedRates {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "expiresAt")]
    pub expires_at: DateTime<Utc>,
    pub data: Vec<CurrencyRate>,
}

pub struct RateCache {
    slot: Arc<dyn KeyValueSlot>,
    clock: Arc<dyn Clock>,
}

impl RateCache {
    pub fn new(slot: Arc<dyn KeyValueSlot>, clock: Arc<dyn Clock>) -> Self {
        Self { slot, clock }
    }

    /// Returns the stored snapshot if it is still fresh. Corrupt or expired
    /// entries are deleted before reporting a miss, so a later read does not
    /// have to re-derive the verdict.
    pub async fn read(&self) -> Option<CachedRates> {
        let Some(raw) = self.slot.get(STORAGE_KEY).await else {
            debug!("Cache MISS for {STORAGE_KEY}");
            return None;
        };

        let cached: CachedRates = match serde_json::from_str(&raw) {
            Ok(cached) => cached,
            Err(e) => {
                debug!("Dropping corrupt cache entry: {e}");
                self.slot.remove(STORAGE_KEY).await;
                return None;
            }
        };

        // An entry read exactly at its expiry instant is still valid.
        if self.clock.now() > cached.expires_at {
            debug!("Cache entry expired for {STORAGE_KEY}");
            self.slot.remove(STORAGE_KEY).await;
            return None;
        }

        debug!("Cache HIT for {STORAGE_KEY}");
        Some(cached)
    }

    /// Stamps the snapshot with the current time and overwrites the slot.
    pub async fn write(&self, data: &[CurrencyRate]) -> Result<(), StorageError> {
        let timestamp = self.clock.now();
        let entry = CachedRates {
            timestamp,
            expires_at: timestamp + Duration::seconds(CACHE_TTL_SECS),
            data: data.to_vec(),
        };
        let raw = serde_json::to_string(&entry)?;
        self.slot.put(STORAGE_KEY, raw).await?;
        debug!("Cache PUT for {STORAGE_KEY}");
        Ok(())
    }

    /// Deletes the slot. Idempotent.
    pub async fn invalidate(&self) {
        self.slot.remove(STORAGE_KEY).await;
        debug!("Cache REMOVE for {STORAGE_KEY}");
    }
}
