//! Application state with shared `TrackerService` for concurrent access.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. Uses `tokio::sync::Mutex` (async-aware) instead of
//! `std::sync::Mutex` (blocking) so handlers await the lock without blocking
//! the tokio runtime.
//!
//! Note: `tokio::sync::RwLock` would allow concurrent reads, but
//! `TrackerService` contains `rusqlite::Connection` which is `!Sync`,
//! preventing it from being held behind an `RwLock`. The `Mutex` approach
//! is correct and non-blocking.

use std::sync::Arc;

use dashmap::DashMap;
use navtrail_core::TabId;

use crate::error::ApiError;
use crate::service::TrackerService;

/// Shared application state for the HTTP server.
///
/// Wraps `TrackerService` in `Arc<tokio::sync::Mutex<>>` so it can be shared
/// across async handler tasks. All handlers acquire the lock via
/// `.lock().await`.
#[derive(Clone)]
pub struct AppState {
    /// The shared tracker service (async Mutex -- non-blocking await).
    pub service: Arc<tokio::sync::Mutex<TrackerService>>,
    /// Latest reported page title per tab, written by the title endpoint
    /// and read when a navigation lands. Lock-free map; titles are advisory
    /// and last-write-wins.
    pub tab_titles: Arc<DashMap<TabId, String>>,
}

impl AppState {
    /// Creates a new `AppState` with a `TrackerService` backed by the given
    /// SQLite database path.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        let service = TrackerService::new(db_path)?;
        Ok(AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
            tab_titles: Arc::new(DashMap::new()),
        })
    }

    /// Creates a new `AppState` with an in-memory database (for testing).
    pub fn in_memory() -> Result<Self, ApiError> {
        let service = TrackerService::in_memory()?;
        Ok(AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
            tab_titles: Arc::new(DashMap::new()),
        })
    }
}
