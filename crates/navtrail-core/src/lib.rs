pub mod classifier;
pub mod events;
pub mod graph;
pub mod id;
pub mod projection;
pub mod settings;
pub mod site_filter;

// Re-export commonly used types
pub use classifier::{Classifier, NavigationOutcome, REDIRECT_HEURISTIC_WINDOW_MS};
pub use events::{NavigationEvent, RedirectEvent, TabCreatedEvent};
pub use graph::{Edge, Graph};
pub use id::{FrameId, NodeId, TabId};
pub use projection::{base_domain, label_for, project, ProjectedGraph, ProjectedLink, ProjectedNode};
pub use settings::{ForceSettings, TrackedSites, ViewSettings, ViewType};
pub use site_filter::is_tracked;
