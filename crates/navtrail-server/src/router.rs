//! Router assembly for the navtrail HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax.
/// CORS is permissive (the browser instrumentation posts from page origins).
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Event ingestion
        .route("/events/navigation", post(handlers::events::navigation))
        .route("/events/redirect", post(handlers::events::redirect))
        .route("/events/tab-created", post(handlers::events::tab_created))
        // Tab title reporting
        .route("/tabs/{tab_id}/title", put(handlers::tabs::report_title))
        // Control messages
        .route("/control", post(handlers::control::control))
        // Graph reads
        .route("/graph", get(handlers::graph::projection))
        .route("/export", get(handlers::graph::export))
        // Settings
        .route(
            "/settings/sites",
            get(handlers::settings::get_sites).put(handlers::settings::update_sites),
        )
        .route(
            "/settings/view",
            get(handlers::settings::get_view).put(handlers::settings::update_view),
        )
        .route(
            "/settings/force",
            get(handlers::settings::get_force).put(handlers::settings::update_force),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
