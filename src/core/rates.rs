//! Decides between the cached rate snapshot and a network refresh.

use crate::core::cache::RateCache;
use crate::core::currency::{CurrencyRate, RateError, RateProvider};
use std::sync::Arc;
use tracing::{debug, warn};

/// Serves currency rates from the cache, refreshing over the network when the
/// cached snapshot is missing or stale.
///
/// Two overlapping `get_rates` calls can both observe a miss and both fetch;
/// the later write overwrites the earlier one. That is harmless here because
/// the payload derives purely from the remote source, so no single-flight
/// coordination is done.
pub struct RateService {
    cache: RateCache,
    provider: Arc<dyn RateProvider>,
}

impl RateService {
    pub fn new(cache: RateCache, provider: Arc<dyn RateProvider>) -> Self {
        Self { cache, provider }
    }

    /// Returns the current rates, fetching only when the cache cannot serve.
    ///
    /// Freshness is solely the cache's verdict; an entry the cache has deemed
    /// expired is never used as a fallback, even when the fetch fails.
    pub async fn get_rates(&self) -> Result<Vec<CurrencyRate>, RateError> {
        if let Some(cached) = self.cache.read().await {
            debug!("Serving {} cached currency rates", cached.data.len());
            return Ok(cached.data);
        }

        let fresh = self.provider.fetch_rates().await?;
        if let Err(e) = self.cache.write(&fresh).await {
            // The cache is an optimization; a failed write must not cost the
            // caller the data it already has.
            warn!("Failed to cache currency rates: {e}");
        }
        Ok(fresh)
    }

    /// Drops the cached snapshot so the next call refetches.
    pub async fn refresh(&self) -> Result<Vec<CurrencyRate>, RateError> {
        self.cache.invalidate().await;
        self.get_rates().await
    }
}
