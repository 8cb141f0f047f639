//! Typed load/save helpers over the fixed blob keys.
//!
//! The tracker persists four blobs: the graph under `graphData`, the
//! tracked-site list under `sitesToTrack`, and the two settings objects
//! under `viewSettings` and `forceSettings`. An absent blob always loads
//! as the type's default. Settings blobs additionally tolerate an invalid
//! shape (falling back to defaults) since they may be hand-edited; a
//! corrupt graph blob is surfaced as an error so callers can decide.

use serde_json::Value;

use navtrail_core::{ForceSettings, Graph, TrackedSites, ViewSettings};

use crate::error::StorageError;
use crate::traits::KvStore;

/// Key for the persisted navigation graph.
pub const GRAPH_KEY: &str = "graphData";
/// Key for the tracked-site list.
pub const SITES_KEY: &str = "sitesToTrack";
/// Key for the renderer view settings.
pub const VIEW_SETTINGS_KEY: &str = "viewSettings";
/// Key for the force-simulation settings.
pub const FORCE_SETTINGS_KEY: &str = "forceSettings";

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// Loads the persisted graph; an absent blob is an empty graph.
///
/// Older blobs missing `pageTitles` or the per-edge flags deserialize via
/// serde defaults, so upgrades never require a data migration.
pub fn load_graph<S: KvStore>(store: &S) -> Result<Graph, StorageError> {
    match store.get(GRAPH_KEY)? {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Ok(Graph::new()),
    }
}

/// Persists the full graph, replacing the prior blob.
pub fn save_graph<S: KvStore>(store: &mut S, graph: &Graph) -> Result<(), StorageError> {
    let value = serde_json::to_value(graph)?;
    store.set(GRAPH_KEY, &value)
}

/// Deletes the persisted graph blob.
pub fn remove_graph<S: KvStore>(store: &mut S) -> Result<(), StorageError> {
    store.remove(GRAPH_KEY)
}

/// Returns the persisted graph blob pretty-printed, or `None` when no
/// graph has been saved yet. The stored shape is returned verbatim.
pub fn export_graph_json<S: KvStore>(store: &S) -> Result<Option<String>, StorageError> {
    match store.get(GRAPH_KEY)? {
        Some(value) => Ok(Some(serde_json::to_string_pretty(&value)?)),
        None => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Loads the tracked-site list; absent or malformed blobs yield the default.
pub fn load_tracked_sites<S: KvStore>(store: &S) -> Result<TrackedSites, StorageError> {
    load_or_default(store, SITES_KEY)
}

/// Persists the tracked-site list.
pub fn save_tracked_sites<S: KvStore>(
    store: &mut S,
    sites: &TrackedSites,
) -> Result<(), StorageError> {
    let value = serde_json::to_value(sites)?;
    store.set(SITES_KEY, &value)
}

/// Loads the view settings; absent or malformed blobs yield the default.
pub fn load_view_settings<S: KvStore>(store: &S) -> Result<ViewSettings, StorageError> {
    load_or_default(store, VIEW_SETTINGS_KEY)
}

/// Persists the view settings.
pub fn save_view_settings<S: KvStore>(
    store: &mut S,
    settings: &ViewSettings,
) -> Result<(), StorageError> {
    let value = serde_json::to_value(settings)?;
    store.set(VIEW_SETTINGS_KEY, &value)
}

/// Loads the force-simulation settings; absent or malformed blobs yield the
/// default.
pub fn load_force_settings<S: KvStore>(store: &S) -> Result<ForceSettings, StorageError> {
    load_or_default(store, FORCE_SETTINGS_KEY)
}

/// Persists the force-simulation settings.
pub fn save_force_settings<S: KvStore>(
    store: &mut S,
    settings: &ForceSettings,
) -> Result<(), StorageError> {
    let value = serde_json::to_value(settings)?;
    store.set(FORCE_SETTINGS_KEY, &value)
}

/// Reads `key` and deserializes it, falling back to `T::default()` when the
/// blob is absent or does not match the expected shape.
fn load_or_default<S, T>(store: &S, key: &str) -> Result<T, StorageError>
where
    S: KvStore,
    T: serde::de::DeserializeOwned + Default,
{
    Ok(store
        .get(key)?
        .and_then(|value: Value| serde_json::from_value(value).ok())
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryKv;
    use navtrail_core::{Edge, NodeId, ViewType};
    use serde_json::json;

    fn node(s: &str) -> NodeId {
        NodeId(s.to_string())
    }

    #[test]
    fn absent_graph_loads_empty() {
        let store = InMemoryKv::new();
        let graph = load_graph(&store).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn graph_roundtrips_through_store() {
        let mut store = InMemoryKv::new();
        let mut graph = Graph::new();
        graph.add_node(node("en.wikipedia.org/wiki/Rust"));
        graph.add_node(node("en.wikipedia.org/wiki/Mozilla"));
        graph.add_edge(Edge {
            source: node("en.wikipedia.org/wiki/Rust"),
            target: node("en.wikipedia.org/wiki/Mozilla"),
            timestamp: 7,
            is_redirect: false,
            is_new_tab: true,
        });
        graph.set_title(node("en.wikipedia.org/wiki/Rust"), "Rust".into());

        save_graph(&mut store, &graph).unwrap();
        let loaded = load_graph(&store).unwrap();
        assert_eq!(loaded.node_count(), 2);
        assert_eq!(loaded.edge_count(), 1);
        assert_eq!(loaded.title(&node("en.wikipedia.org/wiki/Rust")), Some("Rust"));
    }

    #[test]
    fn legacy_graph_blob_without_titles_loads() {
        let mut store = InMemoryKv::new();
        store
            .set(
                GRAPH_KEY,
                &json!({
                    "nodes": ["a.org/", "b.org/"],
                    "edges": [{"source": "a.org/", "target": "b.org/", "timestamp": 1}]
                }),
            )
            .unwrap();

        let graph = load_graph(&store).unwrap();
        assert_eq!(graph.node_count(), 2);
        let edge = &graph.edges()[0];
        assert!(!edge.is_redirect);
        assert!(!edge.is_new_tab);
        assert!(graph.page_titles().is_empty());
    }

    #[test]
    fn export_is_none_until_first_save() {
        let mut store = InMemoryKv::new();
        assert!(export_graph_json(&store).unwrap().is_none());

        save_graph(&mut store, &Graph::new()).unwrap();
        let text = export_graph_json(&store).unwrap().unwrap();
        assert!(text.contains("\"nodes\""));
    }

    #[test]
    fn tracked_sites_default_when_malformed() {
        let mut store = InMemoryKv::new();
        store.set(SITES_KEY, &json!({"not": "a list"})).unwrap();
        let sites = load_tracked_sites(&store).unwrap();
        assert_eq!(sites, TrackedSites::default());
    }

    #[test]
    fn view_settings_roundtrip() {
        let mut store = InMemoryKv::new();
        let settings = ViewSettings {
            view_type: ViewType::Url,
            regex_pattern: String::new(),
        };
        save_view_settings(&mut store, &settings).unwrap();
        assert_eq!(load_view_settings(&store).unwrap(), settings);
    }

    #[test]
    fn force_settings_default_when_absent() {
        let store = InMemoryKv::new();
        let force = load_force_settings(&store).unwrap();
        assert_eq!(force, ForceSettings::default());
    }
}
