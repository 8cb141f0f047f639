//! HTTP/JSON API server for the browser navigation tracker.
//!
//! Browser-side instrumentation posts navigation, redirect, and tab events
//! here; the server classifies them into a navigation graph, persists the
//! graph, and serves a renderer-ready projection plus settings management.
//! This crate contains the server framework, API schema types, error
//! handling, and route definitions.

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
