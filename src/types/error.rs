//! Error types for the labgraph library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the labgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The edge is already present in a directed graph.
    #[error("Duplicate edge {tail} -> {head}")]
    DuplicateEdge { tail: NodeId, head: NodeId },

    /// Self-edge on a graph that does not allow loops.
    #[error("Loop on node {0} not allowed")]
    Loop(NodeId),

    /// The edge to remove is not present.
    #[error("Edge {tail} -> {head} not found")]
    EdgeNotFound { tail: NodeId, head: NodeId },

    /// Node is not a member of the graph.
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    /// Two distinct nodes share a value, so values cannot serve as keys.
    #[error("Labels are not unique")]
    AmbiguousLabels,

    /// A node already carries the label a new node was meant to get.
    #[error("Label {0:?} already exists")]
    LabelExists(String),

    /// No node carries the requested label.
    #[error("No node labeled {0:?}")]
    LabelNotFound(String),

    /// A line of the text format could not be parsed.
    #[error("Malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// A value whose text form cannot be read back as a single token.
    #[error("Value {0:?} cannot be written as a single token")]
    UnwritableValue(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// True for the errors `read_graph` treats as redundant input.
    pub fn is_redundant_edge(&self) -> bool {
        matches!(self, Self::DuplicateEdge { .. } | Self::Loop(_))
    }
}

/// Convenience result type for labgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
