//! Concurrent frequency index for popularity ranking.
//!
//! Maps normalized queries to their counts so `popular` never has to walk
//! the trie. Internally synchronized: callers issue concurrent increments
//! and reads with no external locking.

use rustc_hash::FxHashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy)]
struct Entry {
    frequency: u64,
    /// Assigned once, on first insertion. Breaks frequency ties in
    /// [`FrequencyIndex::top_n`] so equal counts rank oldest-first.
    seq: u64,
}

/// Query → frequency mapping with first-insertion-order tie-breaking.
#[derive(Debug, Default)]
pub struct FrequencyIndex {
    entries: RwLock<FxHashMap<String, Entry>>,
    next_seq: AtomicU64,
}

impl FrequencyIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `delta` to the query's count, inserting with `delta` if absent.
    /// Returns the resulting count.
    pub fn merge_increment(&self, query: &str, delta: u64) -> u64 {
        let mut entries = self.entries.write().unwrap();
        match entries.get_mut(query) {
            Some(entry) => {
                entry.frequency += delta;
                entry.frequency
            }
            None => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                entries.insert(query.to_string(), Entry { frequency: delta, seq });
                delta
            }
        }
    }

    /// Sets the query's count outright, keeping its original insertion
    /// position if already present. Used by startup load and seeding.
    pub fn set(&self, query: &str, frequency: u64) {
        let mut entries = self.entries.write().unwrap();
        match entries.get_mut(query) {
            Some(entry) => entry.frequency = frequency,
            None => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                entries.insert(query.to_string(), Entry { frequency, seq });
            }
        }
    }

    /// Current count for a query, if known.
    pub fn get(&self, query: &str) -> Option<u64> {
        self.entries.read().unwrap().get(query).map(|e| e.frequency)
    }

    /// Whether the query has ever been recorded or loaded.
    pub fn contains(&self, query: &str) -> bool {
        self.entries.read().unwrap().contains_key(query)
    }

    /// Up to `limit` (query, frequency) pairs, highest frequency first.
    /// Equal frequencies rank by first insertion.
    pub fn top_n(&self, limit: usize) -> Vec<(String, u64)> {
        let entries = self.entries.read().unwrap();
        let mut ranked: Vec<(&String, &Entry)> = entries.iter().collect();
        ranked.sort_by(|a, b| b.1.frequency.cmp(&a.1.frequency).then(a.1.seq.cmp(&b.1.seq)));
        ranked
            .into_iter()
            .take(limit)
            .map(|(query, entry)| (query.clone(), entry.frequency))
            .collect()
    }

    /// Number of distinct queries known.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// True when no query has been recorded or loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_merge_increment_inserts_then_adds() {
        let index = FrequencyIndex::new();
        assert_eq!(index.merge_increment("rust", 1), 1);
        assert_eq!(index.merge_increment("rust", 1), 2);
        assert_eq!(index.merge_increment("rust", 5), 7);
        assert_eq!(index.get("rust"), Some(7));
        assert_eq!(index.get("go"), None);
    }

    #[test]
    fn test_set_overwrites() {
        let index = FrequencyIndex::new();
        index.set("rust", 100);
        index.set("rust", 3);
        assert_eq!(index.get("rust"), Some(3));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_top_n_orders_by_frequency_desc() {
        let index = FrequencyIndex::new();
        index.set("low", 10);
        index.set("high", 200);
        index.set("mid", 50);

        let top = index.top_n(10);
        assert_eq!(
            top,
            vec![
                ("high".to_string(), 200),
                ("mid".to_string(), 50),
                ("low".to_string(), 10)
            ]
        );
        assert_eq!(index.top_n(2).len(), 2);
        assert_eq!(index.top_n(0).len(), 0);
    }

    #[test]
    fn test_top_n_ties_break_by_insertion_order() {
        let index = FrequencyIndex::new();
        index.set("first", 5);
        index.set("second", 5);
        index.set("third", 5);

        let top = index.top_n(10);
        let names: Vec<&str> = top.iter().map(|(q, _)| q.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_top_n_is_prefix_of_larger_top_n() {
        let index = FrequencyIndex::new();
        index.set("a", 4);
        index.set("b", 9);
        index.set("c", 9);
        index.set("d", 1);

        let small = index.top_n(2);
        let large = index.top_n(4);
        assert_eq!(small[..], large[..2]);
    }

    #[test]
    fn test_concurrent_increments_sum_exactly() {
        let index = Arc::new(FrequencyIndex::new());
        let threads = 8;
        let per_thread = 200;

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let index = Arc::clone(&index);
                thread::spawn(move || {
                    for _ in 0..per_thread {
                        index.merge_increment("shared", 1);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(index.get("shared"), Some(threads * per_thread));
    }
}
