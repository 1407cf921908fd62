//! JSON-file-backed durable store.
//!
//! All records live in one JSON object (key → count) held in memory behind
//! a mutex and rewritten on every mutation. Writes go to a temporary file
//! first and are renamed into place, so a crash mid-write never leaves a
//! torn store behind.

use crate::store::DurableStore;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Durable store persisting to a single JSON file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, u64>>,
}

impl FileStore {
    /// Opens the store at `path`, creating parent directories as needed.
    /// A missing file is an empty store; an unreadable or corrupt file is
    /// an error (the engine falls back to seeds in that case).
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let entries = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read store file {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse store file {}", path.display()))?
        } else {
            HashMap::new()
        };

        Ok(Self { path, entries: Mutex::new(entries) })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize and atomically replace the backing file. Callers hold the
    /// entries mutex, so persisted snapshots are never interleaved.
    fn persist(&self, entries: &HashMap<String, u64>) -> Result<()> {
        let content =
            serde_json::to_string_pretty(entries).context("Failed to serialize store")?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        Ok(())
    }
}

impl DurableStore for FileStore {
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
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value);
        self.persist(&entries)
    }

    fn incr_by(&self, key: &str, delta: u64) -> Result<u64> {
        let mut entries = self.entries.lock().unwrap();
        let value = entries.entry(key.to_string()).or_insert(0);
        *value += delta;
        let result = *value;
        self.persist(&entries)?;
        Ok(result)
    }
}
