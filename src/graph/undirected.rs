//! Undirected graph: every edge is stored as a symmetric pair of relations.

use crate::types::{GraphError, GraphResult, Node, NodeId};

use super::{DirectedGraph, GraphMut, GraphView};

/// An undirected graph without loops.
///
/// `head ∈ tail.adj ⟺ tail ∈ head.adj` holds after every operation. Adding an
/// edge that already exists in either direction is not an error.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V> {
    inner: DirectedGraph<V>,
}

impl<V> UndirectedGraph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            inner: DirectedGraph::new(),
        }
    }
}

impl<V> Default for UndirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> GraphView for UndirectedGraph<V> {
    type Value = V;

    fn allow_loops(&self) -> bool {
        false
    }

    fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    fn edge_count(&self) -> usize {
        self.inner.arc_count() / 2
    }

    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.inner.nodes()
    }

    fn node(&self, id: NodeId) -> Option<&Node<V>> {
        self.inner.node(id)
    }
}

impl<V> GraphMut for UndirectedGraph<V> {
    fn add_node(&mut self, value: V) -> NodeId {
        self.inner.add_node(value)
    }

    fn remove_node(&mut self, id: NodeId) -> GraphResult<V> {
        let node = self.inner.take_node(id)?;
        // Symmetry means the removed node's neighbors are exactly the nodes
        // pointing back at it.
        self.inner.purge_arcs_to(id, node.adj);
        log::debug!("removed node {} ({} nodes left)", id, self.node_count());
        Ok(node.value)
    }

    fn add_edge(&mut self, tail: NodeId, head: NodeId) -> GraphResult<()> {
        if tail == head {
            return Err(GraphError::Loop(tail));
        }
        self.inner.require(tail)?;
        self.inner.require(head)?;
        let forward = self.inner.link(tail, head);
        let backward = self.inner.link(head, tail);
        if forward || backward {
            log::trace!("added edge {} -- {}", tail, head);
        }
        Ok(())
    }

    fn remove_edge(&mut self, tail: NodeId, head: NodeId) -> GraphResult<()> {
        if !self.inner.require(tail)?.has_neighbor(head) {
            self.inner.require(head)?;
            return Err(GraphError::EdgeNotFound { tail, head });
        }
        if !self.inner.require(head)?.has_neighbor(tail) {
            return Err(GraphError::EdgeNotFound {
                tail: head,
                head: tail,
            });
        }
        self.inner.unlink(tail, head);
        self.inner.unlink(head, tail);
        log::trace!("removed edge {} -- {}", tail, head);
        Ok(())
    }

    fn value_mut(&mut self, id: NodeId) -> Option<&mut V> {
        self.inner.value_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_is_symmetric_and_idempotent() {
        let mut g = UndirectedGraph::new();
        let a = g.add_node("A");
        let b = g.add_node("B");
        g.add_edge(a, b).unwrap();
        g.add_edge(a, b).unwrap();
        g.add_edge(b, a).unwrap();
        assert!(g.contains_edge(a, b));
        assert!(g.contains_edge(b, a));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn loop_rejected_before_membership() {
        let mut g: UndirectedGraph<&str> = UndirectedGraph::new();
        let a = g.add_node("A");
        g.remove_node(a).unwrap();
        assert!(matches!(g.add_edge(a, a), Err(GraphError::Loop(id)) if id == a));
    }

    #[test]
    fn remove_edge_takes_both_directions() {
        let mut g = UndirectedGraph::new();
        let a = g.add_node(1);
        let b = g.add_node(2);
        g.add_edge(a, b).unwrap();
        g.remove_edge(b, a).unwrap();
        assert!(!g.contains_edge(a, b));
        assert!(!g.contains_edge(b, a));
        assert!(matches!(
            g.remove_edge(a, b),
            Err(GraphError::EdgeNotFound { .. })
        ));
    }
}
