//! Schema types for the settings endpoints.

use serde::{Deserialize, Serialize};

/// The active tracked-site list.
#[derive(Debug, Clone, Serialize)]
pub struct SitesResponse {
    pub sites: Vec<String>,
}

/// Replaces the tracked-site list wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSitesRequest {
    pub sites: Vec<String>,
}
