//! Algorithms written once against the graph contract.

pub mod compare;
pub mod stats;

pub use compare::{find_by_label, label_index, labeled_graph_eq};
pub use stats::GraphStats;
