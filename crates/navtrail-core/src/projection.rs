//! Read-only projection of the graph into renderer input.
//!
//! The renderer receives plain node/link lists; tracked status is passed in
//! as a precomputed set so the presentation layer never calls back into
//! core state. Label derivation lives here too: it only needs the graph,
//! the title map, and the view settings.

use std::collections::HashSet;

use regex::Regex;
use serde::Serialize;

use crate::graph::Graph;
use crate::id::NodeId;
use crate::settings::{ViewSettings, ViewType};

/// Suffixes where the registrable domain spans three labels.
const KNOWN_CC_TLDS: [&str; 6] = ["co.uk", "com.au", "co.jp", "co.nz", "co.za", "com.br"];

/// A node as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedNode {
    pub id: NodeId,
    pub label: String,
    pub tracked: bool,
}

/// A link as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedLink {
    pub source: NodeId,
    pub target: NodeId,
    pub timestamp: u64,
    pub is_redirect: bool,
    pub is_new_tab: bool,
}

/// Presentation-ready node/link lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedGraph {
    pub nodes: Vec<ProjectedNode>,
    pub links: Vec<ProjectedLink>,
}

/// Projects the graph for the renderer. Pure and read-only.
pub fn project(graph: &Graph, view: &ViewSettings, tracked: &HashSet<NodeId>) -> ProjectedGraph {
    let nodes = graph
        .nodes()
        .map(|id| ProjectedNode {
            id: id.clone(),
            label: label_for(id, graph.title(id), view),
            tracked: tracked.contains(id),
        })
        .collect();

    let links = graph
        .edges()
        .iter()
        .map(|edge| ProjectedLink {
            source: edge.source.clone(),
            target: edge.target.clone(),
            timestamp: edge.timestamp,
            is_redirect: edge.is_redirect,
            is_new_tab: edge.is_new_tab,
        })
        .collect();

    ProjectedGraph { nodes, links }
}

/// Derives the display label for a node under the given view settings.
///
/// An absent title falls back to the hostname portion of the NodeId, and an
/// invalid user-supplied regex falls back to the plain title -- neither is
/// an error.
pub fn label_for(id: &NodeId, title: Option<&str>, view: &ViewSettings) -> String {
    match view.view_type {
        ViewType::Url => url_label(id),
        ViewType::PageName => title_label(id, title),
        ViewType::PageNameRegex => {
            if let Some(title) = title {
                if !view.regex_pattern.is_empty() {
                    if let Ok(re) = Regex::new(&view.regex_pattern) {
                        if let Some(caps) = re.captures(title) {
                            // Prefer the first capture group so patterns can
                            // exclude their delimiter (e.g. "^(.*?) -").
                            if let Some(m) = caps.get(1).or_else(|| caps.get(0)) {
                                return m.as_str().to_string();
                            }
                        }
                    }
                }
            }
            // Invalid pattern or no match: plain title display.
            title_label(id, title)
        }
    }
}

/// The registrable base domain of a hostname, for renderer grouping and
/// coloring (en.wikipedia.org -> wikipedia.org, news.bbc.co.uk -> bbc.co.uk).
pub fn base_domain(hostname: &str) -> String {
    let parts: Vec<&str> = hostname.split('.').collect();
    if parts.len() < 2 {
        return hostname.to_string();
    }

    let last_three = parts[parts.len().saturating_sub(3)..].join(".");
    if KNOWN_CC_TLDS.iter().any(|cc| last_three.ends_with(cc)) && parts.len() >= 3 {
        last_three
    } else {
        parts[parts.len() - 2..].join(".")
    }
}

fn url_label(id: &NodeId) -> String {
    let hostname = id.hostname();
    let path = id.as_str().splitn(2, '/').nth(1).unwrap_or("");
    if path.is_empty() {
        return hostname.to_string();
    }
    format!("{}/{}", hostname, truncate(path, 20, 17))
}

fn title_label(id: &NodeId, title: Option<&str>) -> String {
    match title {
        Some(title) if !title.is_empty() => truncate(title, 25, 22),
        _ => id.hostname().to_string(),
    }
}

/// Truncates to `keep` characters with an ellipsis when longer than `max`.
/// Counts characters, not bytes, so multi-byte titles stay intact.
fn truncate(text: &str, max: usize, keep: usize) -> String {
    if text.chars().count() > max {
        let mut out: String = text.chars().take(keep).collect();
        out.push_str("...");
        out
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    fn node(s: &str) -> NodeId {
        NodeId(s.to_string())
    }

    fn view(view_type: ViewType, pattern: &str) -> ViewSettings {
        ViewSettings {
            view_type,
            regex_pattern: pattern.to_string(),
        }
    }

    #[test]
    fn url_label_truncates_long_paths() {
        let id = node("example.com/a/very/long/path/that/keeps/going");
        let label = label_for(&id, None, &view(ViewType::Url, ""));
        assert_eq!(label, "example.com/a/very/long/path/...");

        let short = node("example.com/short");
        assert_eq!(
            label_for(&short, None, &view(ViewType::Url, "")),
            "example.com/short"
        );
    }

    #[test]
    fn url_label_without_path_is_hostname() {
        assert_eq!(
            label_for(&node("example.com"), None, &view(ViewType::Url, "")),
            "example.com"
        );
    }

    #[test]
    fn page_name_label_prefers_title() {
        let label = label_for(
            &node("example.com/a"),
            Some("Short title"),
            &view(ViewType::PageName, ""),
        );
        assert_eq!(label, "Short title");
    }

    #[test]
    fn page_name_label_truncates_long_titles() {
        let label = label_for(
            &node("example.com/a"),
            Some("A very long page title indeed, truly"),
            &view(ViewType::PageName, ""),
        );
        assert_eq!(label, "A very long page title...");
    }

    #[test]
    fn absent_title_falls_back_to_hostname() {
        let label = label_for(&node("en.example.com/a/b"), None, &view(ViewType::PageName, ""));
        assert_eq!(label, "en.example.com");
    }

    #[test]
    fn regex_view_extracts_match() {
        let label = label_for(
            &node("en.wikipedia.org/wiki/Rust"),
            Some("Rust - Wikipedia"),
            &view(ViewType::PageNameRegex, "^(.*?) -"),
        );
        assert_eq!(label, "Rust");
    }

    #[test]
    fn invalid_regex_falls_back_to_plain_title() {
        let label = label_for(
            &node("example.com/a"),
            Some("Some title"),
            &view(ViewType::PageNameRegex, "([unclosed"),
        );
        assert_eq!(label, "Some title");
    }

    #[test]
    fn regex_without_match_falls_back_to_plain_title() {
        let label = label_for(
            &node("example.com/a"),
            Some("No separator here"),
            &view(ViewType::PageNameRegex, "^(.*?) -"),
        );
        assert_eq!(label, "No separator here");
    }

    #[test]
    fn base_domain_handles_cc_tlds() {
        assert_eq!(base_domain("en.wikipedia.org"), "wikipedia.org");
        assert_eq!(base_domain("news.bbc.co.uk"), "bbc.co.uk");
        assert_eq!(base_domain("example.com"), "example.com");
        assert_eq!(base_domain("localhost"), "localhost");
    }

    #[test]
    fn project_carries_links_and_tracked_flags() {
        let mut graph = Graph::new();
        graph.add_node(node("example.com/a"));
        graph.add_node(node("other.org/b"));
        graph.add_edge(Edge {
            source: node("example.com/a"),
            target: node("other.org/b"),
            timestamp: 42,
            is_redirect: true,
            is_new_tab: false,
        });
        graph.set_title(node("example.com/a"), "A".into());

        let tracked: HashSet<NodeId> = [node("example.com/a")].into_iter().collect();
        let projected = project(&graph, &ViewSettings::default(), &tracked);

        assert_eq!(projected.nodes.len(), 2);
        assert!(projected.nodes[0].tracked);
        assert!(!projected.nodes[1].tracked);
        assert_eq!(projected.nodes[0].label, "A");
        // No title for the second node: hostname fallback.
        assert_eq!(projected.nodes[1].label, "other.org");

        assert_eq!(projected.links.len(), 1);
        let link = &projected.links[0];
        assert_eq!(link.source, node("example.com/a"));
        assert_eq!(link.timestamp, 42);
        assert!(link.is_redirect);
        assert!(!link.is_new_tab);
    }
}
