//! Node handles and the node record stored in a graph's arena.

use std::collections::BTreeSet;

use serde::Serialize;

/// Opaque handle naming one node of one graph.
///
/// Handles are arena slots. A graph never reuses the slot of a removed node,
/// so a stale handle is reported as `NodeNotFound` instead of silently naming
/// a newer node. Handles carry no graph identity: passing a handle from one
/// graph to another is a caller error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The arena slot behind this handle.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A value plus its outgoing neighbors.
///
/// Nodes are created and destroyed only by the owning graph; the public API
/// hands out shared references.
#[derive(Debug, Clone)]
pub struct Node<V> {
    pub(crate) value: V,
    pub(crate) adj: BTreeSet<NodeId>,
}

impl<V> Node<V> {
    pub(crate) fn new(value: V) -> Self {
        Self {
            value,
            adj: BTreeSet::new(),
        }
    }

    /// The user-supplied value (the node's label).
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Outgoing neighbors in ascending handle order.
    pub fn adj(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adj.iter().copied()
    }

    /// Whether `head` is an outgoing neighbor.
    pub fn has_neighbor(&self, head: NodeId) -> bool {
        self.adj.contains(&head)
    }

    /// Number of outgoing neighbors.
    pub fn out_degree(&self) -> usize {
        self.adj.len()
    }
}
