//! Navigation event types delivered by the external event source.

use serde::{Deserialize, Serialize};

use crate::id::{FrameId, TabId};

/// A completed navigation in a tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationEvent {
    pub tab: TabId,
    pub frame: FrameId,
    /// The URL the tab ended up on.
    pub url: String,
    /// Milliseconds since the Unix epoch at which the navigation completed.
    pub timestamp_ms: u64,
}

/// A server- or client-side redirect observed before the navigation
/// completes. The preferred redirect-detection path when the event source
/// supports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirectEvent {
    pub tab: TabId,
    pub frame: FrameId,
    pub source_url: String,
    pub target_url: String,
    pub timestamp_ms: u64,
}

/// A new tab opened from an existing tab (e.g. middle-click or
/// target=_blank). Seeds the new tab's navigation chain from the opener.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabCreatedEvent {
    pub tab: TabId,
    pub opener: TabId,
}
