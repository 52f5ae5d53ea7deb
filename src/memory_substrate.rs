//! In-memory cache substrate

use crate::substrate::{CacheSubstrate, IterationMode, KeyEntry, KeyIterator};
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone)]
struct StoredEntry {
    content: Bytes,
    mtime: i64,
}

/// In-memory cache substrate
///
/// Backs the adapter with a process-local map. Entries carry a modification
/// timestamp stamped at store time, so metadata iteration behaves like a real
/// cache's. Cloning is cheap and clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemorySubstrate {
    entries: Arc<RwLock<HashMap<String, StoredEntry>>>,
}

impl MemorySubstrate {
    /// Create a new empty memory substrate
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently stored
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Returns true if no entries are stored
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}

impl CacheSubstrate for MemorySubstrate {
    fn contains(&self, key: &str) -> bool {
        self.entries.read().unwrap().contains_key(key)
    }

    fn fetch(&self, key: &str) -> Option<Bytes> {
        self.entries
            .read()
            .unwrap()
            .get(key)
            .map(|entry| entry.content.clone())
    }

    fn store(&self, key: &str, content: &[u8]) -> bool {
        let entry = StoredEntry {
            content: Bytes::copy_from_slice(content),
            mtime: chrono::Utc::now().timestamp(),
        };
        self.entries.write().unwrap().insert(key.to_string(), entry);
        true
    }

    fn remove(&self, key: &str) -> bool {
        self.entries.write().unwrap().remove(key).is_some()
    }

    fn iterate(&self, mode: IterationMode) -> KeyIterator {
        // Snapshot under the lock; the handle stays valid after release.
        let entries: Vec<KeyEntry> = self
            .entries
            .read()
            .unwrap()
            .iter()
            .map(|(key, entry)| match mode {
                IterationMode::KeysOnly => KeyEntry::key_only(key.clone()),
                IterationMode::WithMtime => KeyEntry::with_mtime(key.clone(), entry.mtime),
            })
            .collect();

        Some(Box::new(entries.into_iter()))
    }
}
