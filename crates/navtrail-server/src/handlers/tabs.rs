//! Tab title reporting.

use axum::extract::{Path, State};
use axum::Json;

use navtrail_core::TabId;

use crate::error::ApiError;
use crate::schema::events::ReportTitleRequest;
use crate::state::AppState;

/// Stores the latest title for a tab and applies it to the page the tab is
/// currently on (when that page is already in the graph).
///
/// `PUT /tabs/{tab_id}/title`
pub async fn report_title(
    State(state): State<AppState>,
    Path(tab_id): Path<i64>,
    Json(req): Json<ReportTitleRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let tab = TabId(tab_id);
    state.tab_titles.insert(tab, req.title.clone());

    let mut service = state.service.lock().await;
    if let Some(node) = service.current_node(tab) {
        service.apply_title(&node, &req.title);
    }
    Ok(Json(serde_json::json!({ "success": true })))
}
