//! Schema types for the control endpoint.

use serde::Deserialize;

/// A tagged control message.
///
/// Unrecognized actions deserialize to `Unknown` instead of failing, and
/// the service answers them with `false`; senders probing for capabilities
/// get a definitive no rather than an error.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ControlRequest {
    /// Asks whether a URL matches the active tracked-site list.
    IsTrackedSite { url: String },
    /// Returns the active tracked-site list.
    GetSitesToTrack,
    /// Signals that settings were written out-of-band; triggers a reload.
    SettingsUpdated,
    /// Empties the graph and all per-tab state.
    ClearGraphData,
    /// Any action this server does not implement.
    #[serde(other)]
    Unknown,
}
