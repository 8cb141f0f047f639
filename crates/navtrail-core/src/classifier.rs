//! The navigation event classifier: the per-tab state machine that decides
//! when a graph edge is emitted and of what kind.
//!
//! State per tab is `(previous node, last navigation timestamp)`; globally
//! the classifier keeps a redirect map (most recent redirect target per
//! source node). Explicit redirect events are the preferred detection path;
//! when they fire, the completed-navigation event for the same hop is
//! suppressed so one logical hop is not counted twice. When the event
//! source cannot deliver redirect events, a short-elapsed-time heuristic
//! classifies the edge instead.
//!
//! The classifier performs no I/O. Each call reports (via its return value)
//! whether the graph was mutated, and the service layer persists and
//! resolves page titles accordingly.

use std::collections::HashMap;

use crate::events::{NavigationEvent, RedirectEvent, TabCreatedEvent};
use crate::graph::{Edge, Graph};
use crate::id::{NodeId, TabId};
use crate::site_filter::is_tracked;

/// Two completed navigations closer together than this are treated as a
/// redirect when no explicit redirect event was observed.
pub const REDIRECT_HEURISTIC_WINDOW_MS: u64 = 1000;

/// Transient per-tab navigation state. Never persisted.
#[derive(Debug, Clone)]
struct TabState {
    /// The node the tab is currently on (the source of its next hop).
    previous: NodeId,
    /// When the last navigation in this tab completed (ms since epoch).
    last_navigation_ms: u64,
    /// Set when the tab was opened from another tab and has not yet
    /// completed its first navigation.
    new_tab_pending: bool,
}

/// What a completed-navigation event amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Not the top-level frame; ignored entirely.
    IgnoredFrame,
    /// First observed navigation for this tab; no edge possible yet.
    FirstVisit { current: NodeId },
    /// The tail of a redirect already recorded by an explicit redirect
    /// event; edge emission skipped.
    RedirectSuppressed { current: NodeId },
    /// Neither endpoint is tracked; no edge, but the per-tab chain advanced.
    UntrackedHop { current: NodeId },
    /// An edge was appended to the graph.
    EdgeRecorded {
        current: NodeId,
        is_redirect: bool,
        is_new_tab: bool,
    },
}

impl NavigationOutcome {
    /// Whether this outcome mutated the graph (and so needs a persist).
    pub fn mutated_graph(&self) -> bool {
        matches!(self, NavigationOutcome::EdgeRecorded { .. })
    }
}

/// The per-tab navigation state machine.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    tabs: HashMap<TabId, TabState>,
    /// Most recent redirect target per source node. Entries are never
    /// pruned except on clear; bounded by distinct redirect sources.
    redirects: HashMap<NodeId, NodeId>,
}

impl Classifier {
    pub fn new() -> Self {
        Classifier::default()
    }

    /// Handles an explicit redirect event.
    ///
    /// The redirect is recorded in the redirect map unconditionally (so the
    /// matching completed-navigation can be suppressed); an edge is emitted
    /// only when either endpoint is tracked. Returns whether the graph was
    /// mutated.
    pub fn on_redirect(&mut self, graph: &mut Graph, sites: &[String], ev: &RedirectEvent) -> bool {
        if !ev.frame.is_main() {
            return false;
        }

        let source = NodeId::resolve(&ev.source_url);
        let target = NodeId::resolve(&ev.target_url);
        self.redirects.insert(source.clone(), target.clone());

        if !is_tracked(&ev.source_url, sites) && !is_tracked(&ev.target_url, sites) {
            return false;
        }

        graph.add_node(source.clone());
        graph.add_node(target.clone());
        graph.add_edge(Edge {
            source,
            target,
            timestamp: ev.timestamp_ms,
            is_redirect: true,
            is_new_tab: false,
        });
        true
    }

    /// Handles a completed navigation.
    ///
    /// Whatever the outcome, a main-frame navigation always advances the
    /// tab's `(previous, timestamp)` state so that future tracked hops can
    /// chain through untracked ones.
    pub fn on_navigation(
        &mut self,
        graph: &mut Graph,
        sites: &[String],
        ev: &NavigationEvent,
    ) -> NavigationOutcome {
        if !ev.frame.is_main() {
            return NavigationOutcome::IgnoredFrame;
        }

        let current = NodeId::resolve(&ev.url);
        let now = ev.timestamp_ms;

        let outcome = match self.tabs.get(&ev.tab) {
            None => NavigationOutcome::FirstVisit {
                current: current.clone(),
            },
            Some(state) => {
                let previous = state.previous.clone();
                if self.redirects.get(&previous) == Some(&current) {
                    // This event is the tail of a redirect already recorded
                    // by on_redirect; one logical hop, one edge.
                    NavigationOutcome::RedirectSuppressed {
                        current: current.clone(),
                    }
                } else if !is_tracked(previous.as_str(), sites) && !is_tracked(&ev.url, sites) {
                    NavigationOutcome::UntrackedHop {
                        current: current.clone(),
                    }
                } else {
                    let time_diff = now.saturating_sub(state.last_navigation_ms);
                    let is_new_tab = state.new_tab_pending;
                    // Heuristic fallback for event sources without explicit
                    // redirect events. A new-tab hop is never a redirect.
                    let is_redirect =
                        !is_new_tab && time_diff < REDIRECT_HEURISTIC_WINDOW_MS;

                    graph.add_node(previous.clone());
                    graph.add_node(current.clone());
                    graph.add_edge(Edge {
                        source: previous.clone(),
                        target: current.clone(),
                        timestamp: now,
                        is_redirect,
                        is_new_tab,
                    });
                    if is_redirect {
                        // Record the inferred redirect so a subsequent hop
                        // in the chain can suppress correctly.
                        self.redirects.insert(previous, current.clone());
                    }
                    NavigationOutcome::EdgeRecorded {
                        current: current.clone(),
                        is_redirect,
                        is_new_tab,
                    }
                }
            }
        };

        self.tabs.insert(
            ev.tab,
            TabState {
                previous: current,
                last_navigation_ms: now,
                new_tab_pending: false,
            },
        );
        outcome
    }

    /// Seeds a newly created tab's state from its opener, so the first
    /// completed navigation in the new tab links back to the opener's page
    /// as an `is_new_tab` edge. No-op when the opener is unknown.
    pub fn on_tab_created(&mut self, ev: &TabCreatedEvent) {
        if let Some(opener) = self.tabs.get(&ev.opener) {
            let seeded = TabState {
                previous: opener.previous.clone(),
                last_navigation_ms: opener.last_navigation_ms,
                new_tab_pending: true,
            };
            self.tabs.insert(ev.tab, seeded);
        }
    }

    /// Resets all per-tab state and the redirect map.
    pub fn clear(&mut self) {
        self.tabs.clear();
        self.redirects.clear();
    }

    /// Whether a tab has navigation history.
    pub fn has_tab(&self, tab: TabId) -> bool {
        self.tabs.contains_key(&tab)
    }

    /// The node a tab is currently on, if it has navigated.
    pub fn current_node(&self, tab: TabId) -> Option<&NodeId> {
        self.tabs.get(&tab).map(|state| &state.previous)
    }

    /// The most recent redirect target recorded for a source node.
    pub fn redirect_target(&self, source: &NodeId) -> Option<&NodeId> {
        self.redirects.get(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::FrameId;

    const TAB: TabId = TabId(1);

    fn sites() -> Vec<String> {
        vec!["example.com".to_string()]
    }

    fn nav(url: &str, ts: u64) -> NavigationEvent {
        NavigationEvent {
            tab: TAB,
            frame: FrameId::MAIN,
            url: url.to_string(),
            timestamp_ms: ts,
        }
    }

    fn redirect(source: &str, target: &str, ts: u64) -> RedirectEvent {
        RedirectEvent {
            tab: TAB,
            frame: FrameId::MAIN,
            source_url: source.to_string(),
            target_url: target.to_string(),
            timestamp_ms: ts,
        }
    }

    #[test]
    fn first_visit_records_no_edge() {
        let mut classifier = Classifier::new();
        let mut graph = Graph::new();

        let outcome = classifier.on_navigation(&mut graph, &sites(), &nav("https://example.com/a", 1000));
        assert_eq!(
            outcome,
            NavigationOutcome::FirstVisit {
                current: NodeId("example.com/a".into())
            }
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn tracked_hop_records_edge() {
        let mut classifier = Classifier::new();
        let mut graph = Graph::new();

        classifier.on_navigation(&mut graph, &sites(), &nav("https://example.com/a", 1000));
        let outcome = classifier.on_navigation(&mut graph, &sites(), &nav("https://example.com/b", 5000));

        assert!(outcome.mutated_graph());
        assert_eq!(graph.edge_count(), 1);
        let edge = &graph.edges()[0];
        assert_eq!(edge.source, NodeId("example.com/a".into()));
        assert_eq!(edge.target, NodeId("example.com/b".into()));
        assert!(!edge.is_redirect);
        assert!(!edge.is_new_tab);
    }

    #[test]
    fn heuristic_redirect_below_window() {
        let mut classifier = Classifier::new();
        let mut graph = Graph::new();

        classifier.on_navigation(&mut graph, &sites(), &nav("https://example.com/a", 1000));
        classifier.on_navigation(&mut graph, &sites(), &nav("https://example.com/b", 1400));

        assert_eq!(graph.edge_count(), 1);
        assert!(graph.edges()[0].is_redirect);
        // The inferred redirect is recorded for later suppression.
        assert_eq!(
            classifier.redirect_target(&NodeId("example.com/a".into())),
            Some(&NodeId("example.com/b".into()))
        );
    }

    #[test]
    fn no_heuristic_redirect_above_window() {
        let mut classifier = Classifier::new();
        let mut graph = Graph::new();

        classifier.on_navigation(&mut graph, &sites(), &nav("https://example.com/a", 1000));
        classifier.on_navigation(&mut graph, &sites(), &nav("https://example.com/b", 6000));

        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.edges()[0].is_redirect);
    }

    #[test]
    fn explicit_redirect_then_completed_yields_one_edge() {
        let mut classifier = Classifier::new();
        let mut graph = Graph::new();

        classifier.on_navigation(&mut graph, &sites(), &nav("https://example.com/a", 1000));
        let mutated = classifier.on_redirect(
            &mut graph,
            &sites(),
            &redirect("https://example.com/a", "https://example.com/b", 1020),
        );
        assert!(mutated);

        let outcome =
            classifier.on_navigation(&mut graph, &sites(), &nav("https://example.com/b", 1050));
        assert_eq!(
            outcome,
            NavigationOutcome::RedirectSuppressed {
                current: NodeId("example.com/b".into())
            }
        );

        // Exactly one edge a -> b, flagged as a redirect.
        assert_eq!(graph.edge_count(), 1);
        let edge = &graph.edges()[0];
        assert_eq!(edge.source, NodeId("example.com/a".into()));
        assert_eq!(edge.target, NodeId("example.com/b".into()));
        assert!(edge.is_redirect);

        // The chain still advanced to b.
        let outcome =
            classifier.on_navigation(&mut graph, &sites(), &nav("https://example.com/c", 9000));
        assert!(outcome.mutated_graph());
        assert_eq!(graph.edges()[1].source, NodeId("example.com/b".into()));
    }

    #[test]
    fn untracked_redirect_is_mapped_but_not_recorded() {
        let mut classifier = Classifier::new();
        let mut graph = Graph::new();

        let mutated = classifier.on_redirect(
            &mut graph,
            &sites(),
            &redirect("https://other.org/a", "https://other.org/b", 1000),
        );
        assert!(!mutated);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(
            classifier.redirect_target(&NodeId("other.org/a".into())),
            Some(&NodeId("other.org/b".into()))
        );
    }

    #[test]
    fn untracked_hop_advances_chain_without_edge() {
        let mut classifier = Classifier::new();
        let mut graph = Graph::new();

        // untracked1 -> untracked2: no edge.
        classifier.on_navigation(&mut graph, &sites(), &nav("https://one.org/a", 1000));
        let outcome = classifier.on_navigation(&mut graph, &sites(), &nav("https://two.org/b", 5000));
        assert_eq!(
            outcome,
            NavigationOutcome::UntrackedHop {
                current: NodeId("two.org/b".into())
            }
        );
        assert_eq!(graph.edge_count(), 0);

        // untracked2 -> tracked: one edge with the untracked source.
        let outcome =
            classifier.on_navigation(&mut graph, &sites(), &nav("https://example.com/c", 9000));
        assert!(outcome.mutated_graph());
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges()[0].source, NodeId("two.org/b".into()));
        assert_eq!(graph.edges()[0].target, NodeId("example.com/c".into()));
    }

    #[test]
    fn non_main_frames_are_ignored_entirely() {
        let mut classifier = Classifier::new();
        let mut graph = Graph::new();

        let sub = NavigationEvent {
            tab: TAB,
            frame: FrameId(3),
            url: "https://example.com/iframe".to_string(),
            timestamp_ms: 1000,
        };
        assert_eq!(
            classifier.on_navigation(&mut graph, &sites(), &sub),
            NavigationOutcome::IgnoredFrame
        );
        assert!(!classifier.has_tab(TAB));

        let sub_redirect = RedirectEvent {
            tab: TAB,
            frame: FrameId(3),
            source_url: "https://example.com/a".to_string(),
            target_url: "https://example.com/b".to_string(),
            timestamp_ms: 1000,
        };
        assert!(!classifier.on_redirect(&mut graph, &sites(), &sub_redirect));
        assert!(classifier
            .redirect_target(&NodeId("example.com/a".into()))
            .is_none());
        assert!(graph.is_empty());
    }

    #[test]
    fn new_tab_edge_links_back_to_opener() {
        let mut classifier = Classifier::new();
        let mut graph = Graph::new();

        classifier.on_navigation(&mut graph, &sites(), &nav("https://example.com/a", 1000));
        classifier.on_tab_created(&TabCreatedEvent {
            tab: TabId(2),
            opener: TAB,
        });

        let first_in_new_tab = NavigationEvent {
            tab: TabId(2),
            frame: FrameId::MAIN,
            url: "https://example.com/b".to_string(),
            timestamp_ms: 1100,
        };
        let outcome = classifier.on_navigation(&mut graph, &sites(), &first_in_new_tab);
        assert_eq!(
            outcome,
            NavigationOutcome::EdgeRecorded {
                current: NodeId("example.com/b".into()),
                is_redirect: false,
                is_new_tab: true,
            }
        );
        let edge = &graph.edges()[0];
        assert_eq!(edge.source, NodeId("example.com/a".into()));
        assert!(edge.is_new_tab);
        // Close in time to the opener's navigation, but never a redirect.
        assert!(!edge.is_redirect);

        // The flag applies to the first navigation only.
        classifier.on_navigation(
            &mut graph,
            &sites(),
            &NavigationEvent {
                tab: TabId(2),
                frame: FrameId::MAIN,
                url: "https://example.com/c".to_string(),
                timestamp_ms: 9000,
            },
        );
        assert!(!graph.edges()[1].is_new_tab);
    }

    #[test]
    fn tab_created_with_unknown_opener_is_noop() {
        let mut classifier = Classifier::new();
        classifier.on_tab_created(&TabCreatedEvent {
            tab: TabId(2),
            opener: TabId(99),
        });
        assert!(!classifier.has_tab(TabId(2)));
    }

    #[test]
    fn clear_forgets_history() {
        let mut classifier = Classifier::new();
        let mut graph = Graph::new();

        classifier.on_navigation(&mut graph, &sites(), &nav("https://example.com/a", 1000));
        classifier.on_redirect(
            &mut graph,
            &sites(),
            &redirect("https://example.com/a", "https://example.com/b", 1020),
        );
        classifier.clear();

        assert!(!classifier.has_tab(TAB));
        assert!(classifier
            .redirect_target(&NodeId("example.com/a".into()))
            .is_none());

        // Behaves as if no prior history existed.
        let mut fresh = Graph::new();
        let outcome =
            classifier.on_navigation(&mut fresh, &sites(), &nav("https://example.com/b", 2000));
        assert_eq!(
            outcome,
            NavigationOutcome::FirstVisit {
                current: NodeId("example.com/b".into())
            }
        );
    }
}
