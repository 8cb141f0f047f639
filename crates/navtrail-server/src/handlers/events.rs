//! Event ingestion handlers (navigation, redirect, tab-created).

use std::time::{SystemTime, UNIX_EPOCH};

use axum::extract::State;
use axum::Json;

use navtrail_core::{
    FrameId, NavigationEvent, NavigationOutcome, RedirectEvent, TabCreatedEvent, TabId,
};

use crate::error::ApiError;
use crate::schema::events::{
    EventAck, NavigationEventRequest, RedirectEventRequest, TabCreatedRequest,
};
use crate::state::AppState;

/// Milliseconds since the Unix epoch, for events posted without their own
/// timestamp.
fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Records a completed navigation.
///
/// `POST /events/navigation`
pub async fn navigation(
    State(state): State<AppState>,
    Json(req): Json<NavigationEventRequest>,
) -> Result<Json<EventAck>, ApiError> {
    let ev = NavigationEvent {
        tab: TabId(req.tab_id),
        frame: FrameId(req.frame_id),
        url: req.url,
        timestamp_ms: req.timestamp.unwrap_or_else(now_ms),
    };

    let mut service = state.service.lock().await;
    let outcome = service.record_navigation(&ev);

    // Attach the latest title reported for this tab to the page it just
    // landed on. Titles often arrive before the navigation completes.
    let current = match &outcome {
        NavigationOutcome::IgnoredFrame => None,
        NavigationOutcome::FirstVisit { current }
        | NavigationOutcome::RedirectSuppressed { current }
        | NavigationOutcome::UntrackedHop { current }
        | NavigationOutcome::EdgeRecorded { current, .. } => Some(current.clone()),
    };
    if let Some(current) = current {
        if let Some(title) = state.tab_titles.get(&ev.tab) {
            service.apply_title(&current, title.value());
        }
    }

    Ok(Json(EventAck {
        recorded: outcome.mutated_graph(),
    }))
}

/// Records an explicit redirect hop.
///
/// `POST /events/redirect`
pub async fn redirect(
    State(state): State<AppState>,
    Json(req): Json<RedirectEventRequest>,
) -> Result<Json<EventAck>, ApiError> {
    let ev = RedirectEvent {
        tab: TabId(req.tab_id),
        frame: FrameId(req.frame_id),
        source_url: req.source_url,
        target_url: req.redirect_url,
        timestamp_ms: req.timestamp.unwrap_or_else(now_ms),
    };

    let mut service = state.service.lock().await;
    let recorded = service.record_redirect(&ev);
    Ok(Json(EventAck { recorded }))
}

/// Records a tab opened from another tab.
///
/// `POST /events/tab-created`
pub async fn tab_created(
    State(state): State<AppState>,
    Json(req): Json<TabCreatedRequest>,
) -> Result<Json<EventAck>, ApiError> {
    let ev = TabCreatedEvent {
        tab: TabId(req.tab_id),
        opener: TabId(req.opener_tab_id),
    };

    let mut service = state.service.lock().await;
    service.record_tab_created(&ev);
    // Seeding state never mutates the graph itself.
    Ok(Json(EventAck { recorded: false }))
}
