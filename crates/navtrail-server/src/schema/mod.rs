//! API request/response schema types.
//!
//! All wire types use camelCase field names to match the browser-side
//! instrumentation and the stored blob shapes.

pub mod control;
pub mod events;
pub mod settings;
