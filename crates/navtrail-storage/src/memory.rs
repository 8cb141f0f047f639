//! In-memory implementation of the KvStore trait.
//!
//! Backed by a plain `HashMap`, useful for tests and ephemeral sessions
//! where nothing should outlive the process.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::StorageError;
use crate::traits::KvStore;

/// A volatile blob store. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct InMemoryKv {
    entries: HashMap<String, Value>,
}

impl InMemoryKv {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no blobs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for InMemoryKv {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &Value) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_get_roundtrip() {
        let mut store = InMemoryKv::new();
        assert!(store.get("graphData").unwrap().is_none());

        store.set("graphData", &json!({"nodes": []})).unwrap();
        assert_eq!(store.get("graphData").unwrap(), Some(json!({"nodes": []})));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn set_overwrites_prior_value() {
        let mut store = InMemoryKv::new();
        store.set("k", &json!(1)).unwrap();
        store.set("k", &json!(2)).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(json!(2)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = InMemoryKv::new();
        store.set("k", &json!(true)).unwrap();
        store.remove("k").unwrap();
        assert!(store.get("k").unwrap().is_none());
        // Removing again is fine.
        store.remove("k").unwrap();
        assert!(store.is_empty());
    }
}
