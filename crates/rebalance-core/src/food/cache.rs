//! Bounded cache for food search results
//!
//! Keys are normalized queries. Eviction is least-recently-used, so the
//! searches a user repeats while logging stay warm.

use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;

use super::{normalize_query, FoodItem, FoodSource};
use crate::error::Result;

/// Default number of cached queries
pub const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(50) {
    Some(n) => n,
    None => unreachable!(),
};

/// LRU map from normalized query to results
pub struct SearchCache {
    entries: LruCache<String, Vec<FoodItem>>,
    hits: u64,
    misses: u64,
}

impl SearchCache {
    /// A zero capacity falls back to the default
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(DEFAULT_CACHE_CAPACITY);
        Self {
            entries: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    pub fn get(&mut self, key: &str) -> Option<Vec<FoodItem>> {
        match self.entries.get(key) {
            Some(items) => {
                self.hits += 1;
                Some(items.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn put(&mut self, key: String, items: Vec<FoodItem>) {
        self.entries.put(key, items);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// (hits, misses)
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

impl Default for SearchCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY.get())
    }
}

/// A food source with cached search
///
/// Barcode lookups pass straight through. Source failures are logged and
/// surface as an empty result so a flaky network never blocks logging.
pub struct CachedFoodSearch<S: FoodSource> {
    source: S,
    cache: Mutex<SearchCache>,
}

impl<S: FoodSource> CachedFoodSearch<S> {
    pub fn new(source: S, capacity: usize) -> Self {
        Self {
            source,
            cache: Mutex::new(SearchCache::new(capacity)),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Search with caching; short queries return nothing without a lookup
    pub async fn search(&self, query: &str) -> Vec<FoodItem> {
        let Some(key) = normalize_query(query) else {
            return Vec::new();
        };

        if let Some(items) = self.with_cache(|cache| cache.get(&key)).flatten() {
            tracing::debug!(query = %key, count = items.len(), "Food search cache hit");
            return items;
        }

        match self.source.search(&key).await {
            Ok(items) => {
                tracing::debug!(
                    query = %key,
                    source = self.source.name(),
                    count = items.len(),
                    "Food search complete"
                );
                self.with_cache(|cache| cache.put(key, items.clone()));
                items
            }
            Err(e) => {
                tracing::warn!(query = %key, source = self.source.name(), "Food search failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Barcode lookup; errors are logged and reported as not found
    pub async fn lookup_barcode(&self, barcode: &str) -> Option<FoodItem> {
        let barcode = barcode.trim();
        if barcode.is_empty() {
            return None;
        }
        match self.source.lookup_barcode(barcode).await {
            Ok(item) => item,
            Err(e) => {
                tracing::warn!(barcode, source = self.source.name(), "Barcode lookup failed: {}", e);
                None
            }
        }
    }

    /// Uncached search that propagates source errors
    pub async fn search_uncached(&self, query: &str) -> Result<Vec<FoodItem>> {
        match normalize_query(query) {
            Some(key) => self.source.search(&key).await,
            None => Ok(Vec::new()),
        }
    }

    pub fn cache_len(&self) -> usize {
        self.with_cache(|cache| cache.len()).unwrap_or(0)
    }

    /// (hits, misses)
    pub fn cache_stats(&self) -> (u64, u64) {
        self.with_cache(|cache| cache.stats()).unwrap_or((0, 0))
    }

    /// Run `f` against the cache; a poisoned lock skips caching
    fn with_cache<T>(&self, f: impl FnOnce(&mut SearchCache) -> T) -> Option<T> {
        match self.cache.lock() {
            Ok(mut cache) => Some(f(&mut cache)),
            Err(_) => {
                tracing::warn!("Food search cache lock poisoned, bypassing cache");
                None
            }
        }
    }
}
