//! Directed graph that also indexes incoming neighbors.

use std::collections::BTreeSet;

use crate::types::{GraphError, GraphResult, Node, NodeId};

use super::{DirectedGraph, GraphMut, GraphView};

/// A directed graph with a backward adjacency index.
///
/// For every pair of nodes `n2 ∈ n1.adj ⟺ n1 ∈ back(n2)`. The index is private
/// and only updated together with the forward relation it mirrors.
#[derive(Debug, Clone)]
pub struct ReverseGraph<V> {
    inner: DirectedGraph<V>,
    /// Incoming neighbors, parallel to the arena slots of `inner`.
    back: Vec<BTreeSet<NodeId>>,
}

impl<V> ReverseGraph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            inner: DirectedGraph::new(),
            back: Vec::new(),
        }
    }

    /// Incoming neighbors of a node.
    pub fn predecessors(&self, id: NodeId) -> GraphResult<impl Iterator<Item = NodeId> + '_> {
        self.inner.require(id)?;
        self.back
            .get(id.0)
            .map(|tails| tails.iter().copied())
            .ok_or(GraphError::NodeNotFound(id))
    }

    /// Number of incoming neighbors.
    pub fn in_degree(&self, id: NodeId) -> GraphResult<usize> {
        Ok(self.predecessors(id)?.count())
    }

    fn back_mut(&mut self, id: NodeId) -> Option<&mut BTreeSet<NodeId>> {
        self.back.get_mut(id.0)
    }
}

impl<V> Default for ReverseGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> GraphView for ReverseGraph<V> {
    type Value = V;

    fn allow_loops(&self) -> bool {
        true
    }

    fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.inner.nodes()
    }

    fn node(&self, id: NodeId) -> Option<&Node<V>> {
        self.inner.node(id)
    }
}

impl<V> GraphMut for ReverseGraph<V> {
    fn add_node(&mut self, value: V) -> NodeId {
        let id = self.inner.add_node(value);
        self.back.resize_with(id.0 + 1, BTreeSet::new);
        id
    }

    fn remove_node(&mut self, id: NodeId) -> GraphResult<V> {
        let node = self.inner.take_node(id)?;
        let tails = self.back_mut(id).map(std::mem::take).unwrap_or_default();
        for head in &node.adj {
            if let Some(back) = self.back_mut(*head) {
                back.remove(&id);
            }
        }
        self.inner.purge_arcs_to(id, tails);
        log::debug!("removed node {} ({} nodes left)", id, self.node_count());
        Ok(node.value)
    }

    fn add_edge(&mut self, tail: NodeId, head: NodeId) -> GraphResult<()> {
        self.inner.add_edge(tail, head)?;
        if let Some(back) = self.back_mut(head) {
            back.insert(tail);
        }
        Ok(())
    }

    fn remove_edge(&mut self, tail: NodeId, head: NodeId) -> GraphResult<()> {
        self.inner.remove_edge(tail, head)?;
        if let Some(back) = self.back_mut(head) {
            back.remove(&tail);
        }
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
    fn back_follows_adj() {
        let mut g = ReverseGraph::new();
        let a = g.add_node('a');
        let b = g.add_node('b');
        g.add_edge(a, b).unwrap();
        assert_eq!(g.predecessors(b).unwrap().collect::<Vec<_>>(), vec![a]);
        assert_eq!(g.in_degree(a).unwrap(), 0);

        g.remove_edge(a, b).unwrap();
        assert_eq!(g.in_degree(b).unwrap(), 0);
    }

    #[test]
    fn remove_node_clears_both_indexes() {
        let mut g = ReverseGraph::new();
        let a = g.add_node('a');
        let b = g.add_node('b');
        let c = g.add_node('c');
        g.add_edge(a, b).unwrap();
        g.add_edge(b, c).unwrap();
        g.add_edge(b, b).unwrap();
        g.remove_node(b).unwrap();
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.neighbors(a).unwrap().count(), 0);
        assert_eq!(g.in_degree(c).unwrap(), 0);
        assert!(g.predecessors(b).is_err());
    }
}
