//! In-memory storage adapter.
//!
//! Backs the same `KeyValueStore` interface as `JsonConnection` but keeps
//! everything in a map. Useful for tests and throwaway sessions; nothing
//! survives the process.

use crate::storage::traits::KeyValueStore;
use anyhow::Result;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
