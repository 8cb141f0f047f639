//! Settings endpoints: tracked sites, view settings, force settings.

use axum::extract::State;
use axum::Json;

use navtrail_core::{ForceSettings, TrackedSites, ViewSettings};

use crate::error::ApiError;
use crate::schema::settings::{SitesResponse, UpdateSitesRequest};
use crate::state::AppState;

/// Returns the active tracked-site list.
///
/// `GET /settings/sites`
pub async fn get_sites(State(state): State<AppState>) -> Result<Json<SitesResponse>, ApiError> {
    let service = state.service.lock().await;
    Ok(Json(SitesResponse {
        sites: service.sites().as_slice().to_vec(),
    }))
}

/// Replaces the tracked-site list. Applies to future events only.
///
/// `PUT /settings/sites`
pub async fn update_sites(
    State(state): State<AppState>,
    Json(req): Json<UpdateSitesRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut service = state.service.lock().await;
    service.set_sites(TrackedSites(req.sites))?;
    Ok(Json(serde_json::json!({ "success": true })))
}

/// Returns the stored view settings (defaults when never saved).
///
/// `GET /settings/view`
pub async fn get_view(State(state): State<AppState>) -> Result<Json<ViewSettings>, ApiError> {
    let service = state.service.lock().await;
    Ok(Json(service.view_settings()?))
}

/// Replaces the view settings.
///
/// `PUT /settings/view`
pub async fn update_view(
    State(state): State<AppState>,
    Json(settings): Json<ViewSettings>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut service = state.service.lock().await;
    service.set_view_settings(&settings)?;
    Ok(Json(serde_json::json!({ "success": true })))
}

/// Returns the stored force-simulation settings (defaults when never saved).
///
/// `GET /settings/force`
pub async fn get_force(State(state): State<AppState>) -> Result<Json<ForceSettings>, ApiError> {
    let service = state.service.lock().await;
    Ok(Json(service.force_settings()?))
}

/// Replaces the force-simulation settings.
///
/// `PUT /settings/force`
pub async fn update_force(
    State(state): State<AppState>,
    Json(settings): Json<ForceSettings>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut service = state.service.lock().await;
    service.set_force_settings(&settings)?;
    Ok(Json(serde_json::json!({ "success": true })))
}
