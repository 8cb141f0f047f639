//! Schema types for the event ingestion endpoints.

use serde::{Deserialize, Serialize};

/// A completed navigation reported by the browser.
///
/// `timestamp` is milliseconds since the Unix epoch; when omitted the
/// server stamps the event on receipt.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEventRequest {
    pub tab_id: i64,
    /// 0 is the top-level frame; anything else is ignored.
    pub frame_id: u32,
    pub url: String,
    pub timestamp: Option<u64>,
}

/// A server-observed redirect hop (HTTP or script-driven).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectEventRequest {
    pub tab_id: i64,
    pub frame_id: u32,
    pub source_url: String,
    #[serde(rename = "redirectUrl")]
    pub redirect_url: String,
    pub timestamp: Option<u64>,
}

/// A tab opened from another tab.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabCreatedRequest {
    pub tab_id: i64,
    pub opener_tab_id: i64,
}

/// Reply to every event post: whether the event changed the graph.
#[derive(Debug, Clone, Serialize)]
pub struct EventAck {
    pub recorded: bool,
}

/// The latest title for a tab's current page.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportTitleRequest {
    pub title: String,
}
