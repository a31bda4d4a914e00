//! In-memory storage backend
//!
//! Used on native targets and in tests. Capacity is accounted in UTF-16
//! code units of keys plus values, the way browsers account LocalStorage.

use std::collections::BTreeMap;

use super::{KeyValueStore, StorageError};

/// Size of a key or value as a browser would count it
fn units(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Map-backed `KeyValueStore`
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStorage {
    /// Create an empty, unbounded store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that rejects writes beyond `quota` units
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            quota: Some(quota),
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Current usage in UTF-16 code units
    pub fn usage(&self) -> usize {
        self.entries.iter().map(|(k, v)| units(k) + units(v)).sum()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota {
            // The entry being replaced does not count against the new write
            let replaced = self
                .entries
                .get(key)
                .map(|old| units(key) + units(old))
                .unwrap_or(0);
            let needed = self.usage() - replaced + units(key) + units(value);
            if needed > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}
