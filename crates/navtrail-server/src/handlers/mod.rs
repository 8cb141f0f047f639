//! HTTP handler functions, grouped by concern. Handlers stay thin and
//! delegate to [`crate::service::TrackerService`].

pub mod control;
pub mod events;
pub mod graph;
pub mod settings;
pub mod tabs;
