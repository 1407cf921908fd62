//! Durable key-value store interface.
//!
//! The engine treats durability as an external collaborator: frequency
//! counts are written through to a store keyed under a fixed namespace and
//! scanned back once at startup. Two implementations ship with the crate:
//!
//! - [`MemoryStore`] - ephemeral, for tests and throwaway runs
//! - [`FileStore`] - a single JSON document on disk, the single-machine
//!   system of record across process restarts

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use anyhow::Result;

/// Namespace prefix for persisted query-frequency records.
pub const FREQUENCY_NAMESPACE: &str = "query:frequency:";

/// Durable counter store. Implementations must make [`incr_by`] atomic
/// under concurrent callers.
///
/// [`incr_by`]: DurableStore::incr_by
pub trait DurableStore: Send + Sync {
    /// All (key, value) records whose key starts with `namespace`.
    /// Used once, at engine startup.
    fn scan_prefix(&self, namespace: &str) -> Result<Vec<(String, u64)>>;

    /// Current value for a key, if present.
    fn get(&self, key: &str) -> Result<Option<u64>>;

    /// Sets a key to an exact value.
    fn set(&self, key: &str, value: u64) -> Result<()>;

    /// Atomically adds `delta` to a key (inserting with `delta` if absent)
    /// and returns the resulting value.
    fn incr_by(&self, key: &str, delta: u64) -> Result<u64>;
}

/// Store key for a normalized query's frequency record.
pub fn frequency_key(query: &str) -> String {
    format!("{FREQUENCY_NAMESPACE}{query}")
}

/// The query embedded in a frequency record key, if the key is namespaced.
pub fn query_of_key(key: &str) -> Option<&str> {
    key.strip_prefix(FREQUENCY_NAMESPACE)
}
