//! Suggestion engine: trie, frequency index, cache, and durability sync
//! behind a three-operation facade.
//!
//! Architecture:
//! - [`trie`] - prefix trie over normalized queries
//! - [`frequency`] - concurrent popularity index
//! - [`cache`] - bulk-invalidated suggestion memoization
//! - [`SuggestEngine`] - the facade composing them over a durable store
//!
//! The engine is one owned aggregate, constructed once at startup and
//! shared by reference (or `Arc`) with every request-handling context.

pub mod cache;
pub mod frequency;
pub mod trie;

pub use cache::SuggestionCache;
pub use frequency::FrequencyIndex;
pub use trie::Trie;

use crate::seed::SEED_QUERIES;
use crate::store::{DurableStore, FREQUENCY_NAMESPACE, frequency_key, query_of_key};
use std::sync::{Arc, RwLock};
use std::sync::atomic::{AtomicU64, Ordering};

/// Default number of suggestions returned by [`SuggestEngine::suggest`].
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Trims surrounding whitespace and lowercases a query or prefix. Applied
/// before every trie, index, cache, and store operation.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Counters describing engine activity since startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineStats {
    /// `suggest` calls served (including blank-prefix no-ops).
    pub queries_served: u64,
    /// `record` calls that updated in-memory state.
    pub records_applied: u64,
    /// Suggestion-cache hits and misses.
    pub cache_hits: u64,
    pub cache_misses: u64,
    /// Durable-store writes that failed and were skipped.
    pub store_errors: u64,
    /// Distinct queries currently known to the frequency index.
    pub known_queries: usize,
}

impl EngineStats {
    pub fn cache_hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 { 0.0 } else { self.cache_hits as f64 / total as f64 }
    }
}

/// Typeahead query engine.
///
/// Exposes exactly three operations: [`suggest`], [`record`], and
/// [`popular`]. All three are total over blank or unknown input; no error
/// escapes them. Durable-store failures degrade to in-memory operation and
/// are surfaced only through [`stats`].
///
/// [`suggest`]: SuggestEngine::suggest
/// [`record`]: SuggestEngine::record
/// [`popular`]: SuggestEngine::popular
/// [`stats`]: SuggestEngine::stats
pub struct SuggestEngine {
    trie: RwLock<Trie>,
    frequencies: FrequencyIndex,
    cache: SuggestionCache,
    store: Arc<dyn DurableStore>,
    queries_served: AtomicU64,
    records_applied: AtomicU64,
    store_errors: AtomicU64,
}

impl SuggestEngine {
    /// Opens an engine over `store`, loading every persisted frequency
    /// record into the trie and frequency index.
    ///
    /// If the scan fails or yields no records, both structures are seeded
    /// from [`SEED_QUERIES`] and the seeds are written back (best effort)
    /// so the next restart loads durable state instead of reseeding.
    pub fn open(store: Arc<dyn DurableStore>) -> Self {
        let engine = Self {
            trie: RwLock::new(Trie::new()),
            frequencies: FrequencyIndex::new(),
            cache: SuggestionCache::new(),
            store,
            queries_served: AtomicU64::new(0),
            records_applied: AtomicU64::new(0),
            store_errors: AtomicU64::new(0),
        };
        engine.load_all();
        engine
    }

    /// Startup sync: durable records first, seed fallback second.
    fn load_all(&self) {
        let records = self
            .store
            .scan_prefix(FREQUENCY_NAMESPACE)
            .unwrap_or_default();

        let mut loaded = 0usize;
        {
            let mut trie = self.trie.write().unwrap();
            for (key, frequency) in records {
                let Some(query) = query_of_key(&key) else {
                    continue;
                };
                let query = normalize(query);
                if query.is_empty() {
                    continue;
                }
                trie.insert(&query, frequency);
                self.frequencies.set(&query, frequency);
                loaded += 1;
            }
        }

        if loaded == 0 {
            self.seed();
        }
    }

    /// Populates trie and index from the built-in list and persists the
    /// seeds. Store failures are counted, not propagated.
    fn seed(&self) {
        let mut trie = self.trie.write().unwrap();
        for &(query, frequency) in SEED_QUERIES {
            trie.insert(query, frequency);
            self.frequencies.set(query, frequency);
            if self.store.set(&frequency_key(query), frequency).is_err() {
                self.store_errors.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Up to `limit` completions of `prefix`, most popular first.
    ///
    /// Served from the suggestion cache when possible; a miss walks the
    /// trie. Blank prefix returns an empty vec.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.queries_served.fetch_add(1, Ordering::Relaxed);

        let prefix = normalize(prefix);
        if prefix.is_empty() {
            return Vec::new();
        }

        self.cache
            .get_or_compute(&prefix, limit, || self.trie.read().unwrap().search(&prefix, limit))
    }

    /// [`suggest`](Self::suggest) with [`DEFAULT_SUGGESTION_LIMIT`].
    pub fn suggest_default(&self, prefix: &str) -> Vec<String> {
        self.suggest(prefix, DEFAULT_SUGGESTION_LIMIT)
    }

    /// Records one occurrence of `query`: first seen inserts with
    /// frequency 1, otherwise increments. Blank input is a no-op.
    ///
    /// Trie and frequency index are updated together under the trie write
    /// guard, which serializes all writers, so the two structures cannot
    /// drift. In-memory state is updated before the durable write-through,
    /// so suggestions and popularity reflect the call as soon as it
    /// returns, whether or not the store is reachable.
    pub fn record(&self, query: &str) {
        let query = normalize(query);
        if query.is_empty() {
            return;
        }

        {
            let mut trie = self.trie.write().unwrap();
            if self.frequencies.contains(&query) {
                trie.increment(&query);
                self.frequencies.merge_increment(&query, 1);
            } else {
                trie.insert(&query, 1);
                self.frequencies.set(&query, 1);
            }
        }

        if self.store.incr_by(&frequency_key(&query), 1).is_err() {
            self.store_errors.fetch_add(1, Ordering::Relaxed);
        }

        self.cache.clear_all();
        self.records_applied.fetch_add(1, Ordering::Relaxed);
    }

    /// Up to `limit` (query, frequency) pairs, most popular first. Equal
    /// frequencies rank by first insertion.
    pub fn popular(&self, limit: usize) -> Vec<(String, u64)> {
        self.frequencies.top_n(limit)
    }

    /// Activity counters since startup.
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            queries_served: self.queries_served.load(Ordering::Relaxed),
            records_applied: self.records_applied.load(Ordering::Relaxed),
            cache_hits: self.cache.hits(),
            cache_misses: self.cache.misses(),
            store_errors: self.store_errors.load(Ordering::Relaxed),
            known_queries: self.frequencies.len(),
        }
    }
}
