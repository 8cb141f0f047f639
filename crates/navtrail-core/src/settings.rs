//! User settings: the tracked-site list plus presentation preferences
//! (owned by the renderer boundary but defined here so the projection can
//! consume them).
//!
//! All settings deserialize leniently: an absent or malformed stored value
//! falls back to the built-in defaults rather than failing.

use serde::{Deserialize, Serialize};

/// The out-of-the-box tracked site.
pub const DEFAULT_TRACKED_SITE: &str = "wikipedia.org";

/// The ordered tracked-site pattern list.
///
/// Serializes transparently as a plain JSON array of strings, matching the
/// stored `sitesToTrack` blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackedSites(pub Vec<String>);

impl Default for TrackedSites {
    fn default() -> Self {
        TrackedSites(vec![DEFAULT_TRACKED_SITE.to_string()])
    }
}

impl TrackedSites {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

/// How node labels are derived in the rendered graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewType {
    /// Hostname plus truncated path.
    Url,
    /// Page title, falling back to the hostname.
    PageName,
    /// First match of a user-supplied regex against the page title.
    PageNameRegex,
}

/// Label/view preferences for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewSettings {
    pub view_type: ViewType,
    pub regex_pattern: String,
}

impl Default for ViewSettings {
    fn default() -> Self {
        ViewSettings {
            view_type: ViewType::PageName,
            // Everything before a " -" suffix, e.g. the article part of
            // "Rust - Wikipedia".
            regex_pattern: "^(.*?) -".to_string(),
        }
    }
}

/// Force-simulation tuning for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForceSettings {
    pub center_force: f64,
    pub repel_force: f64,
    pub link_force: f64,
    pub link_distance: f64,
}

impl Default for ForceSettings {
    fn default() -> Self {
        ForceSettings {
            center_force: 0.95,
            repel_force: -500.0,
            link_force: 1.0,
            link_distance: 30.0,
        }
    }
}
