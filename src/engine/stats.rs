//! Summary statistics over any graph variant.

use std::collections::HashSet;

use serde::Serialize;

use crate::graph::GraphView;
use crate::types::NodeId;

/// Counts describing a graph's shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Number of nodes.
    pub nodes: usize,
    /// Number of edges as reported by the variant.
    pub edges: usize,
    /// Nodes with a self-edge.
    pub loops: usize,
    /// Nodes with no incoming or outgoing edge.
    pub isolated: usize,
    /// Largest number of outgoing neighbors of a single node.
    pub max_out_degree: usize,
    /// Whether the variant accepts self-edges.
    pub allow_loops: bool,
}

impl GraphStats {
    /// Walk the graph once and collect its statistics.
    pub fn collect<G: GraphView>(graph: &G) -> Self {
        let mut has_incoming: HashSet<NodeId> = HashSet::new();
        let mut loops = 0;
        let mut max_out_degree = 0;

        for id in graph.nodes() {
            let Some(node) = graph.node(id) else {
                continue;
            };
            if node.has_neighbor(id) {
                loops += 1;
            }
            max_out_degree = max_out_degree.max(node.out_degree());
            has_incoming.extend(node.adj());
        }

        let isolated = graph
            .nodes()
            .filter(|id| !has_incoming.contains(id))
            .filter(|&id| graph.node(id).is_some_and(|node| node.out_degree() == 0))
            .count();

        Self {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            loops,
            isolated,
            max_out_degree,
            allow_loops: graph.allow_loops(),
        }
    }
}
