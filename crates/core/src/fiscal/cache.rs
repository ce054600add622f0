//! Fiscal year snapshot caching using Moka.
//!
//! Holds the enabled fiscal years per company so repeated lookups skip
//! the store. The owner of the fiscal year data calls
//! [`FiscalYearCache::invalidate`] when records change; nothing here
//! evicts on its own unless a TTL is configured.

use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;

use super::types::FiscalYear;

/// Default cache capacity (number of company snapshots).
const DEFAULT_CACHE_CAPACITY: u64 = 64;

/// Cache key: the company name, or `None` for lookups across every company.
type CacheKey = Option<String>;

/// Per-company cache of fiscal year candidates.
///
/// Thread-safe and cheap to clone; clones share the same entries.
#[derive(Clone)]
pub struct FiscalYearCache {
    cache: Cache<CacheKey, Arc<Vec<FiscalYear>>>,
}

impl FiscalYearCache {
    /// Creates a cache with default capacity and no expiry.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, None)
    }

    /// Creates a cache with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `max_capacity` - Maximum number of company snapshots to keep
    /// * `ttl_secs` - Optional time-to-live in seconds for each snapshot
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: Option<u64>) -> Self {
        let mut builder = Cache::builder().max_capacity(max_capacity);
        if let Some(ttl) = ttl_secs {
            builder = builder.time_to_live(Duration::from_secs(ttl));
        }
        Self {
            cache: builder.build(),
        }
    }

    /// Returns the cached snapshot for `company`, if any.
    #[must_use]
    pub fn get(&self, company: Option<&str>) -> Option<Arc<Vec<FiscalYear>>> {
        self.cache.get(&company.map(str::to_owned))
    }

    /// Stores the snapshot for `company`, replacing any previous one.
    pub fn insert(&self, company: Option<&str>, years: Arc<Vec<FiscalYear>>) {
        self.cache.insert(company.map(str::to_owned), years);
    }

    /// Drops the snapshot for one company.
    pub fn invalidate(&self, company: Option<&str>) {
        self.cache.invalidate(&company.map(str::to_owned));
    }

    /// Drops every snapshot.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Returns the number of snapshots currently cached.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs pending maintenance so counts and invalidations settle.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl Default for FiscalYearCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FiscalYearCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FiscalYearCache")
            .field("entry_count", &self.cache.entry_count())
            .finish()
    }
}
