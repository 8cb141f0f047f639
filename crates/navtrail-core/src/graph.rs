//! The navigation graph container.
//!
//! [`Graph`] owns the node set, the append-only edge sequence, and the page
//! title map. All mutations go through `Graph` methods; the classifier is
//! the only writer during normal operation, and load/clear replace the
//! structure wholesale.
//!
//! The serde representation of `Graph` is exactly the persisted blob and the
//! user-facing export artifact:
//!
//! ```json
//! { "nodes": ["host/path", ...], "edges": [...], "pageTitles": { ... } }
//! ```
//!
//! Edges are kept in insertion order (= temporal order of detection) and
//! duplicate (source, target) pairs are meaningful -- the renderer draws
//! them as thicker lines -- so there is no endpoint-based deduplication.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::id::NodeId;

/// A single page-to-page transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    /// Set for HTTP/navigation redirects (explicit or heuristic).
    #[serde(default)]
    pub is_redirect: bool,
    /// Set when the navigation opened in a new tab from an opener tab.
    #[serde(default)]
    pub is_new_tab: bool,
}

/// The navigation graph: node set, ordered edge list, and page titles.
///
/// `page_titles` defaults to empty on deserialize for compatibility with
/// older stored blobs that predate title tracking, and the edge flags
/// default to false for blobs that predate redirect/new-tab detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Graph {
    nodes: IndexSet<NodeId>,
    edges: Vec<Edge>,
    #[serde(default)]
    page_titles: IndexMap<NodeId, String>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph::default()
    }

    /// Adds a node, returning whether it was newly inserted.
    pub fn add_node(&mut self, id: NodeId) -> bool {
        self.nodes.insert(id)
    }

    /// Appends an edge. Callers add both endpoints before (or with) the
    /// edge; the classifier guarantees this ordering.
    pub fn add_edge(&mut self, edge: Edge) {
        debug_assert!(
            self.nodes.contains(&edge.source) && self.nodes.contains(&edge.target),
            "edge endpoints must be members of the node set"
        );
        self.edges.push(edge);
    }

    /// Records the latest known title for a node. Last write wins.
    pub fn set_title(&mut self, id: NodeId, title: String) {
        self.page_titles.insert(id, title);
    }

    /// The latest known title for a node, if any.
    pub fn title(&self, id: &NodeId) -> Option<&str> {
        self.page_titles.get(id).map(String::as_str)
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.contains(id)
    }

    /// Resets nodes, edges, and titles to empty.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.page_titles.clear();
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn page_titles(&self) -> &IndexMap<NodeId, String> {
        &self.page_titles
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty() && self.page_titles.is_empty()
    }
}
