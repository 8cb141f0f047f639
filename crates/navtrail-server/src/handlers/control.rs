//! The control endpoint: tagged one-shot commands.

use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::schema::control::ControlRequest;
use crate::state::AppState;

/// Dispatches a control message and returns its JSON reply.
///
/// `POST /control`
pub async fn control(
    State(state): State<AppState>,
    Json(req): Json<ControlRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut service = state.service.lock().await;
    Ok(Json(service.control(&req)))
}
