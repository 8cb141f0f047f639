//! TrackerService: the single coordinator between HTTP handlers and the
//! classifier/graph/storage layers.
//!
//! All business logic flows through [`TrackerService`]. Handlers are thin
//! wrappers that delegate to these methods.

use std::collections::HashSet;

use navtrail_core::{
    is_tracked, project, Classifier, ForceSettings, Graph, NavigationEvent, NavigationOutcome,
    NodeId, ProjectedGraph, RedirectEvent, TabCreatedEvent, TrackedSites, ViewSettings,
};
use navtrail_storage::{persist, SqliteKv};

use crate::error::ApiError;
use crate::schema::control::ControlRequest;

/// The central service coordinating event classification, graph state,
/// settings, and persistence.
///
/// Holds the in-memory graph and classifier plus the SQLite blob store.
/// The graph is the source of truth between persists; every mutation is
/// followed by a whole-blob save (last write wins).
pub struct TrackerService {
    /// The current in-memory navigation graph.
    graph: Graph,
    /// Per-tab state machine deciding edge emission.
    classifier: Classifier,
    /// The active tracked-site list (kept in sync with the store).
    sites: TrackedSites,
    /// SQLite blob store for persistence.
    store: SqliteKv,
}

impl TrackerService {
    /// Creates a new TrackerService, opening a SQLite database at `db_path`.
    ///
    /// Loads the persisted graph and tracked-site list. A corrupt graph blob
    /// is logged and replaced with an empty graph rather than refusing to
    /// start; the next persist overwrites it.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        let store = SqliteKv::open(db_path)
            .map_err(|e| ApiError::InternalError(format!("failed to open database: {}", e)))?;
        Ok(Self::from_store(store))
    }

    /// Creates a new TrackerService with an in-memory database (for testing).
    pub fn in_memory() -> Result<Self, ApiError> {
        let store = SqliteKv::open_in_memory()
            .map_err(|e| ApiError::InternalError(format!("failed to open database: {}", e)))?;
        Ok(Self::from_store(store))
    }

    fn from_store(store: SqliteKv) -> Self {
        let graph = match persist::load_graph(&store) {
            Ok(graph) => graph,
            Err(e) => {
                tracing::warn!("stored graph unreadable, starting empty: {}", e);
                Graph::new()
            }
        };
        let sites = match persist::load_tracked_sites(&store) {
            Ok(sites) => sites,
            Err(e) => {
                tracing::warn!("stored site list unreadable, using defaults: {}", e);
                TrackedSites::default()
            }
        };

        TrackerService {
            graph,
            classifier: Classifier::new(),
            sites,
            store,
        }
    }

    /// Persists the current graph. Failures are logged, not propagated:
    /// the in-memory graph stays authoritative and the next successful
    /// save supersedes the miss.
    fn persist(&mut self) {
        if let Err(e) = persist::save_graph(&mut self.store, &self.graph) {
            tracing::warn!("failed to persist graph: {}", e);
        }
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    /// Classifies a completed navigation, persisting when an edge was added.
    pub fn record_navigation(&mut self, ev: &NavigationEvent) -> NavigationOutcome {
        let outcome = self
            .classifier
            .on_navigation(&mut self.graph, self.sites.as_slice(), ev);
        if outcome.mutated_graph() {
            self.persist();
        }
        outcome
    }

    /// Records an explicit redirect, persisting when an edge was added.
    /// Returns whether the graph was mutated.
    pub fn record_redirect(&mut self, ev: &RedirectEvent) -> bool {
        let mutated = self
            .classifier
            .on_redirect(&mut self.graph, self.sites.as_slice(), ev);
        if mutated {
            self.persist();
        }
        mutated
    }

    /// Seeds classifier state for a tab opened from another tab.
    pub fn record_tab_created(&mut self, ev: &TabCreatedEvent) {
        self.classifier.on_tab_created(ev);
    }

    /// Stores the latest page title for a node already in the graph.
    /// Titles for unknown nodes are dropped silently; the node may belong
    /// to an untracked hop that never produced an edge.
    pub fn apply_title(&mut self, node: &NodeId, title: &str) {
        if title.is_empty() {
            return;
        }
        if !self.graph.contains_node(node) {
            tracing::debug!("dropping title for node not in graph: {}", node);
            return;
        }
        self.graph.set_title(node.clone(), title.to_string());
        self.persist();
    }

    // -----------------------------------------------------------------------
    // Control
    // -----------------------------------------------------------------------

    /// Dispatches a control message, returning its JSON reply. Queries
    /// answer `{"result": ...}`, commands answer `{"success": true}`.
    /// Unrecognized actions answer a bare `false` rather than erroring, so
    /// callers probing for capabilities get a definitive no.
    pub fn control(&mut self, req: &ControlRequest) -> serde_json::Value {
        match req {
            ControlRequest::IsTrackedSite { url } => {
                serde_json::json!({ "result": is_tracked(url, self.sites.as_slice()) })
            }
            ControlRequest::GetSitesToTrack => {
                serde_json::json!({ "result": self.sites.as_slice() })
            }
            ControlRequest::SettingsUpdated => {
                self.reload_sites();
                serde_json::json!({ "success": true })
            }
            ControlRequest::ClearGraphData => {
                self.clear();
                serde_json::json!({ "success": true })
            }
            ControlRequest::Unknown => serde_json::json!(false),
        }
    }

    /// Re-reads the tracked-site list from the store (settings hot-reload).
    /// Existing graph data and per-tab state are unaffected; the new list
    /// applies from the next event onward.
    pub fn reload_sites(&mut self) {
        match persist::load_tracked_sites(&self.store) {
            Ok(sites) => self.sites = sites,
            Err(e) => tracing::warn!("failed to reload site list: {}", e),
        }
    }

    /// Empties the graph and all classifier state, then persists the empty
    /// graph. Settings are untouched.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.classifier.clear();
        self.persist();
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Builds the renderer projection under the stored view settings.
    pub fn projection(&self) -> Result<ProjectedGraph, ApiError> {
        let view = persist::load_view_settings(&self.store)?;
        let tracked: HashSet<NodeId> = self
            .graph
            .nodes()
            .filter(|id| is_tracked(id.as_str(), self.sites.as_slice()))
            .cloned()
            .collect();
        Ok(project(&self.graph, &view, &tracked))
    }

    /// The persisted graph blob pretty-printed, or `None` before the first
    /// save.
    pub fn export(&self) -> Result<Option<String>, ApiError> {
        Ok(persist::export_graph_json(&self.store)?)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The node a tab is currently on, if it has navigated.
    pub fn current_node(&self, tab: navtrail_core::TabId) -> Option<NodeId> {
        self.classifier.current_node(tab).cloned()
    }

    // -----------------------------------------------------------------------
    // Settings
    // -----------------------------------------------------------------------

    pub fn sites(&self) -> &TrackedSites {
        &self.sites
    }

    /// Replaces the tracked-site list and persists it. Applies to future
    /// events only; recorded edges are never retroactively filtered.
    pub fn set_sites(&mut self, sites: TrackedSites) -> Result<(), ApiError> {
        persist::save_tracked_sites(&mut self.store, &sites)?;
        self.sites = sites;
        Ok(())
    }

    pub fn view_settings(&self) -> Result<ViewSettings, ApiError> {
        Ok(persist::load_view_settings(&self.store)?)
    }

    pub fn set_view_settings(&mut self, settings: &ViewSettings) -> Result<(), ApiError> {
        Ok(persist::save_view_settings(&mut self.store, settings)?)
    }

    pub fn force_settings(&self) -> Result<ForceSettings, ApiError> {
        Ok(persist::load_force_settings(&self.store)?)
    }

    pub fn set_force_settings(&mut self, settings: &ForceSettings) -> Result<(), ApiError> {
        Ok(persist::save_force_settings(&mut self.store, settings)?)
    }
}
