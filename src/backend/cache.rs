//! PicoDB - In-Memory Cache Backend
//! A concurrent map from key to value with no persistence and no eviction.

use dashmap::DashMap;

use crate::error::{PicoError, Result};
use crate::types::Value;

use super::Backend;

/// In-memory backend backed by a sharded concurrent map.
///
/// Safe to share between threads without external locking. Entries live
/// until deleted or until the cache is dropped.
#[derive(Debug, Default)]
pub struct Cache {
    entries: DashMap<String, Value>,
}

impl Cache {
    /// Create a new, empty cache.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Backend for Cache {
    fn store(&self, key: &str, value: &[u8]) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Value> {
        self.entries
            .get(key)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| PicoError::KeyNotFound(key.to_string()))
    }

    fn delete(&self, key: &str) -> Result<()> {
        match self.entries.remove(key) {
            Some(_) => Ok(()),
            None => Err(PicoError::KeyNotFound(key.to_string())),
        }
    }
}
