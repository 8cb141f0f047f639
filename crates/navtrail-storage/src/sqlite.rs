//! SQLite implementation of [`KvStore`].
//!
//! [`SqliteKv`] persists blobs in a SQLite database with WAL mode and
//! automatic schema migrations. Values are stored as JSON TEXT via
//! serde_json; an upsert replaces any prior value in one statement.

use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;

use crate::error::StorageError;
use crate::traits::KvStore;

/// SQLite-backed implementation of [`KvStore`].
pub struct SqliteKv {
    conn: Connection,
}

impl SqliteKv {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn open(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteKv { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteKv { conn })
    }
}

impl KvStore for SqliteKv {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let text: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        match text {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &Value) -> Result<(), StorageError> {
        let text = serde_json::to_string(value)?;
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, text],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}
