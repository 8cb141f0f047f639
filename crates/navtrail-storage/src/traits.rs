//! The [`KvStore`] trait defining the storage contract for named blobs.
//!
//! The tracker persists whole JSON blobs under fixed keys; each `set`
//! overwrites the previous value atomically (last write wins, no merge).
//! All backends (InMemoryKv, SqliteKv) implement this trait, ensuring they
//! are fully swappable without changing core logic.

use serde_json::Value;

use crate::error::StorageError;

/// The storage contract: atomic get/set/remove of named JSON blobs.
///
/// The trait is synchronous (not async) for simplicity in the current
/// single-writer design.
pub trait KvStore {
    /// Reads the blob stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Stores `value` under `key`, overwriting any prior value.
    fn set(&mut self, key: &str, value: &Value) -> Result<(), StorageError>;

    /// Deletes the blob stored under `key`. Removing an absent key is not
    /// an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
