//! Directed graph over an index arena. The other variants are built on it.

use crate::types::{GraphError, GraphResult, Node, NodeId};

use super::{GraphMut, GraphView};

/// A directed graph with self-loops allowed and duplicate edges rejected.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V> {
    /// Arena of nodes; removed nodes leave an empty slot that is never reused.
    slots: Vec<Option<Node<V>>>,
    /// Number of live nodes.
    len: usize,
    /// Number of `tail -> head` relations across all adjacency sets.
    arcs: usize,
}

impl<V> DirectedGraph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
            arcs: 0,
        }
    }

    /// Number of `tail -> head` relations, loops included.
    pub(crate) fn arc_count(&self) -> usize {
        self.arcs
    }

    pub(crate) fn require(&self, id: NodeId) -> GraphResult<&Node<V>> {
        self.node(id).ok_or(GraphError::NodeNotFound(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<V>> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Insert `head` into `tail.adj`. Both nodes must already be checked.
    /// Returns false when the relation was already present.
    pub(crate) fn link(&mut self, tail: NodeId, head: NodeId) -> bool {
        let inserted = self
            .node_mut(tail)
            .is_some_and(|node| node.adj.insert(head));
        if inserted {
            self.arcs += 1;
        }
        inserted
    }

    /// Remove `head` from `tail.adj`. Returns false when it was absent.
    pub(crate) fn unlink(&mut self, tail: NodeId, head: NodeId) -> bool {
        let removed = self
            .node_mut(tail)
            .is_some_and(|node| node.adj.remove(&head));
        if removed {
            self.arcs -= 1;
        }
        removed
    }

    /// Take a node out of the arena together with its outgoing relations.
    /// Relations pointing at it from other nodes are left for the caller to
    /// purge with [`Self::purge_arcs_to`].
    pub(crate) fn take_node(&mut self, id: NodeId) -> GraphResult<Node<V>> {
        let node = self
            .slots
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(GraphError::NodeNotFound(id))?;
        self.len -= 1;
        self.arcs -= node.adj.len();
        Ok(node)
    }

    /// Drop `head` from the adjacency of every listed tail.
    pub(crate) fn purge_arcs_to(&mut self, head: NodeId, tails: impl IntoIterator<Item = NodeId>) {
        for tail in tails {
            self.unlink(tail, head);
        }
    }
}

impl<V> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> GraphView for DirectedGraph<V> {
    type Value = V;

    fn allow_loops(&self) -> bool {
        true
    }

    fn node_count(&self) -> usize {
        self.len
    }

    fn edge_count(&self) -> usize {
        self.arcs
    }

    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|_| NodeId(i)))
    }

    fn node(&self, id: NodeId) -> Option<&Node<V>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }
}

impl<V> GraphMut for DirectedGraph<V> {
    fn add_node(&mut self, value: V) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Some(Node::new(value)));
        self.len += 1;
        log::trace!("added node {}", id);
        id
    }

    fn remove_node(&mut self, id: NodeId) -> GraphResult<V> {
        let node = self.take_node(id)?;
        // Without a reverse index any node may point at the removed one.
        for other in self.slots.iter_mut().flatten() {
            if other.adj.remove(&id) {
                self.arcs -= 1;
            }
        }
        log::debug!("removed node {} ({} nodes left)", id, self.len);
        Ok(node.value)
    }

    fn add_edge(&mut self, tail: NodeId, head: NodeId) -> GraphResult<()> {
        self.require(head)?;
        if self.require(tail)?.has_neighbor(head) {
            return Err(GraphError::DuplicateEdge { tail, head });
        }
        self.link(tail, head);
        log::trace!("added edge {} -> {}", tail, head);
        Ok(())
    }

    fn remove_edge(&mut self, tail: NodeId, head: NodeId) -> GraphResult<()> {
        self.require(tail)?;
        self.require(head)?;
        if !self.unlink(tail, head) {
            return Err(GraphError::EdgeNotFound { tail, head });
        }
        log::trace!("removed edge {} -> {}", tail, head);
        Ok(())
    }

    fn value_mut(&mut self, id: NodeId) -> Option<&mut V> {
        self.node_mut(id).map(|node| &mut node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loops_are_allowed() {
        let mut g = DirectedGraph::new();
        let a = g.add_node("A");
        g.add_edge(a, a).unwrap();
        assert!(g.contains_edge(a, a));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn remove_node_with_loop_keeps_counts() {
        let mut g = DirectedGraph::new();
        let a = g.add_node("A");
        let b = g.add_node("B");
        g.add_edge(a, a).unwrap();
        g.add_edge(a, b).unwrap();
        g.add_edge(b, a).unwrap();
        assert_eq!(g.remove_node(a).unwrap(), "A");
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.neighbors(b).unwrap().count(), 0);
    }

    #[test]
    fn removed_slot_is_not_reused() {
        let mut g = DirectedGraph::new();
        let a = g.add_node(1);
        g.remove_node(a).unwrap();
        let b = g.add_node(2);
        assert_ne!(a, b);
        assert!(matches!(g.remove_node(a), Err(GraphError::NodeNotFound(id)) if id == a));
    }

    #[test]
    fn edge_to_missing_node_fails() {
        let mut g = DirectedGraph::new();
        let a = g.add_node(1);
        let b = g.add_node(2);
        g.remove_node(b).unwrap();
        assert!(matches!(g.add_edge(a, b), Err(GraphError::NodeNotFound(_))));
        assert_eq!(g.edge_count(), 0);
    }
}
