//! In-memory store for tests and ephemeral runs.

use crate::store::DurableStore;
use anyhow::Result;
use std::collections::HashMap;
use std::sync::Mutex;

/// `Mutex<HashMap>`-backed store. Increments are atomic by virtue of the
/// mutex; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, u64>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records, for test assertions.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DurableStore for MemoryStore {
    fn scan_prefix(&self, namespace: &str) -> Result<Vec<(String, u64)>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .iter()
            .filter(|(key, _)| key.starts_with(namespace))
            .map(|(key, value)| (key.clone(), *value))
            .collect())
    }

    fn get(&self, key: &str) -> Result<Option<u64>> {
        Ok(self.entries.lock().unwrap().get(key).copied())
    }

    fn set(&self, key: &str, value: u64) -> Result<()> {
        self.entries.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    fn incr_by(&self, key: &str, delta: u64) -> Result<u64> {
        let mut entries = self.entries.lock().unwrap();
        let value = entries.entry(key.to_string()).or_insert(0);
        *value += delta;
        Ok(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_set_get_incr() {
        let store = MemoryStore::new();
        store.set("query:frequency:rust", 10).unwrap();
        assert_eq!(store.get("query:frequency:rust").unwrap(), Some(10));
        assert_eq!(store.incr_by("query:frequency:rust", 2).unwrap(), 12);
        assert_eq!(store.incr_by("query:frequency:go", 1).unwrap(), 1);
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_scan_prefix_filters_namespace() {
        let store = MemoryStore::new();
        store.set("query:frequency:rust", 10).unwrap();
        store.set("query:frequency:go", 5).unwrap();
        store.set("session:abc", 1).unwrap();

        let mut records = store.scan_prefix("query:frequency:").unwrap();
        records.sort();
        assert_eq!(
            records,
            vec![
                ("query:frequency:go".to_string(), 5),
                ("query:frequency:rust".to_string(), 10)
            ]
        );
    }

    #[test]
    fn test_concurrent_incr_by_is_atomic() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..100 {
                        store.incr_by("key", 1).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.get("key").unwrap(), Some(800));
    }
}
