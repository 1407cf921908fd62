//! Suggestion result cache.
//!
//! Memoizes already-ranked, already-limited suggestion lists per
//! (prefix, limit). Any frequency change can reorder suggestions for every
//! prefix sharing an affected path, so invalidation is a bulk clear on
//! every recorded query rather than per-prefix bookkeeping.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Bounded number of cached (prefix, limit) entries.
const CACHE_SIZE: usize = 128;

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct CacheKey {
    prefix: String,
    limit: usize,
}

/// LRU cache over suggestion lists, keyed by normalized prefix and limit.
pub struct SuggestionCache {
    entries: Mutex<LruCache<CacheKey, Vec<String>>>,
    /// Bumped by [`clear_all`](Self::clear_all). A computation started
    /// under an older generation must not be inserted.
    generation: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SuggestionCache {
    pub fn new() -> Self {
        Self::with_capacity(CACHE_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap();
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            generation: AtomicU64::new(0),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns the cached list for `(prefix, limit)`, or computes, stores,
    /// and returns it. `prefix` must already be normalized by the caller.
    pub fn get_or_compute<F>(&self, prefix: &str, limit: usize, compute: F) -> Vec<String>
    where
        F: FnOnce() -> Vec<String>,
    {
        let key = CacheKey { prefix: prefix.to_string(), limit };

        let generation = {
            let mut entries = self.entries.lock().unwrap();
            if let Some(cached) = entries.get(&key) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return cached.clone();
            }
            self.generation.load(Ordering::Relaxed)
        };
        self.misses.fetch_add(1, Ordering::Relaxed);

        // Compute outside the lock; concurrent misses may compute the same
        // list twice. A result is only inserted if no clear_all ran since
        // the miss, so a list computed from pre-invalidation state never
        // outlives the invalidation.
        let computed = compute();
        let mut entries = self.entries.lock().unwrap();
        if self.generation.load(Ordering::Relaxed) == generation {
            entries.put(key, computed.clone());
        }
        computed
    }

    /// Empties the cache unconditionally and retires every in-flight
    /// computation. Invoked on every successful recorded query.
    pub fn clear_all(&self) {
        let mut entries = self.entries.lock().unwrap();
        entries.clear();
        self.generation.fetch_add(1, Ordering::Relaxed);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

impl Default for SuggestionCache {
    fn default() -> Self {
        Self::new()
    }
}
