//! Graph read endpoints: the renderer projection and the raw export.

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::Json;

use navtrail_core::ProjectedGraph;

use crate::error::ApiError;
use crate::state::AppState;

/// Returns the renderer-ready projection of the current graph.
///
/// `GET /graph`
pub async fn projection(
    State(state): State<AppState>,
) -> Result<Json<ProjectedGraph>, ApiError> {
    let service = state.service.lock().await;
    Ok(Json(service.projection()?))
}

/// Returns the persisted graph blob pretty-printed, exactly as stored.
///
/// `GET /export`
pub async fn export(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let service = state.service.lock().await;
    match service.export()? {
        Some(text) => Ok(([(CONTENT_TYPE, "application/json")], text)),
        None => Err(ApiError::NotFound("no graph data saved yet".to_string())),
    }
}
