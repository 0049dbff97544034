//! The capability contract every graph variant implements.
//!
//! Algorithms in `format` and `engine` are written once against these traits
//! and work with any variant.

use crate::types::{GraphError, GraphResult, Node, NodeId};

/// Read-only access to a graph's nodes and adjacency.
pub trait GraphView {
    /// The value type stored in each node.
    type Value;

    /// Whether `add_edge(n, n)` may succeed on this graph.
    fn allow_loops(&self) -> bool;

    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Number of edges. Undirected graphs count each symmetric pair once.
    fn edge_count(&self) -> usize;

    /// All nodes of the graph, in unspecified order.
    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_;

    /// Get a node by handle.
    fn node(&self, id: NodeId) -> Option<&Node<Self::Value>>;

    /// Whether the handle names a live node of this graph.
    fn contains_node(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// The value stored in a node.
    fn value(&self, id: NodeId) -> Option<&Self::Value> {
        self.node(id).map(|node| node.value())
    }

    /// Outgoing neighbors of a node.
    fn neighbors(&self, id: NodeId) -> GraphResult<impl Iterator<Item = NodeId> + '_> {
        self.node(id)
            .map(|node| node.adj())
            .ok_or(GraphError::NodeNotFound(id))
    }

    /// Whether `head` is an outgoing neighbor of `tail`.
    fn contains_edge(&self, tail: NodeId, head: NodeId) -> bool {
        self.node(tail).is_some_and(|node| node.has_neighbor(head))
    }
}

/// Mutation operations. Every structural change goes through these methods;
/// a failed call leaves the graph unchanged.
pub trait GraphMut: GraphView {
    /// Create a node holding `value` and return its handle.
    fn add_node(&mut self, value: Self::Value) -> NodeId;

    /// Remove a node and every edge to or from it, returning its value.
    fn remove_node(&mut self, id: NodeId) -> GraphResult<Self::Value>;

    /// Add the edge `tail -> head` under the variant's edge policy.
    fn add_edge(&mut self, tail: NodeId, head: NodeId) -> GraphResult<()>;

    /// Remove the edge `tail -> head` under the variant's edge policy.
    fn remove_edge(&mut self, tail: NodeId, head: NodeId) -> GraphResult<()>;

    /// Mutable access to a node's value. Values carry no structure, so
    /// changing them never affects adjacency.
    fn value_mut(&mut self, id: NodeId) -> Option<&mut Self::Value>;

    /// Replace a node's value, returning the previous one.
    fn set_value(&mut self, id: NodeId, value: Self::Value) -> GraphResult<Self::Value> {
        self.value_mut(id)
            .map(|slot| std::mem::replace(slot, value))
            .ok_or(GraphError::NodeNotFound(id))
    }
}
