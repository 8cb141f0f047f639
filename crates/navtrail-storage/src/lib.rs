//! Key-value blob persistence for the navigation graph and settings.
//!
//! Provides the [`KvStore`] trait defining the storage contract that all
//! backends implement, plus [`InMemoryKv`] and [`SqliteKv`] as first-class
//! backends. On top of the raw blob store, the [`persist`] module offers
//! typed load/save helpers for the fixed keys the tracker uses
//! (`graphData`, `sitesToTrack`, `viewSettings`, `forceSettings`).
//!
//! Persistence is whole-blob, last-write-wins: every save serializes the
//! full current in-memory state under its key, so the store's invariants
//! stay trivially enforceable and a failed write is simply superseded by
//! the next successful one.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`traits`]: KvStore trait definition
//! - [`memory`]: InMemoryKv implementation
//! - [`schema`]: SQL schema constants and migration setup
//! - [`sqlite`]: SqliteKv implementation
//! - [`persist`]: typed helpers over the fixed keys

pub mod error;
pub mod memory;
pub mod persist;
pub mod schema;
pub mod sqlite;
pub mod traits;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::InMemoryKv;
pub use persist::{FORCE_SETTINGS_KEY, GRAPH_KEY, SITES_KEY, VIEW_SETTINGS_KEY};
pub use sqlite::SqliteKv;
pub use traits::KvStore;
