//! labgraph — small in-memory graphs with a text format and label-based equality.
//!
//! Directed, undirected and reverse-indexed graphs implement one contract
//! ([`GraphView`] / [`GraphMut`]); the serializer and the comparator are
//! written against that contract and work with every variant.

#[cfg(feature = "cli")]
pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{find_by_label, label_index, labeled_graph_eq, GraphStats};
pub use format::{
    read_graph, read_graph_file, read_graph_from, write_graph, write_graph_file, write_graph_to,
};
pub use graph::{DirectedGraph, GraphKind, GraphMut, GraphView, ReverseGraph, UndirectedGraph};
pub use types::{GraphError, GraphResult, Node, NodeId};
