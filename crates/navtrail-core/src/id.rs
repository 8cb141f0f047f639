//! Identity newtypes for graph nodes, browser tabs, and frames.
//!
//! [`NodeId`] is the graph node key: a URL normalized to `hostname + path`
//! with scheme, query, and fragment stripped. Two URLs that normalize to the
//! same NodeId are the same page as far as the graph is concerned.
//! [`TabId`] and [`FrameId`] are distinct wrappers over the event source's
//! integer identifiers so they cannot be confused at the type level.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Normalized page identity: `hostname + path` of a resolved URL.
///
/// Serializes transparently as a plain string, so the node set and title map
/// keep the same JSON shape as the stored blob.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    /// Resolves a raw URL into a NodeId.
    ///
    /// Total and deterministic: on a successful parse the result is
    /// `hostname + path` (no scheme, query, fragment, or port); any input
    /// that fails to parse maps to itself unchanged.
    pub fn resolve(url: &str) -> NodeId {
        match Url::parse(url) {
            Ok(parsed) => NodeId(format!("{}{}", parsed.host_str().unwrap_or(""), parsed.path())),
            Err(_) => NodeId(url.to_string()),
        }
    }

    /// The hostname portion of the id (everything before the first `/`).
    pub fn hostname(&self) -> &str {
        self.0.split('/').next().unwrap_or("")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Browser tab identity from the event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabId(pub i64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Frame identity within a tab. Frame 0 is the top-level frame; all other
/// frames (iframes) are ignored by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameId(pub u32);

impl FrameId {
    /// The top-level frame.
    pub const MAIN: FrameId = FrameId(0);

    pub fn is_main(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
