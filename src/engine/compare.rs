//! Label-based structural comparison and label lookups.

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;

use crate::graph::GraphView;
use crate::types::{GraphError, GraphResult, NodeId};

/// Map each value to a node carrying it. With duplicate values the map is
/// smaller than the graph and which node survives is unspecified.
fn label_map<G>(graph: &G) -> HashMap<&G::Value, NodeId>
where
    G: GraphView,
    G::Value: Eq + Hash,
{
    graph
        .nodes()
        .filter_map(|id| graph.value(id).map(|value| (value, id)))
        .collect()
}

fn neighbor_labels<G>(graph: &G, id: NodeId) -> HashSet<&G::Value>
where
    G: GraphView,
    G::Value: Eq + Hash,
{
    graph
        .node(id)
        .into_iter()
        .flat_map(|node| node.adj())
        .filter_map(|neighbor| graph.value(neighbor))
        .collect()
}

/// Compare two labeled graphs, using node values as the cross-graph key.
///
/// Returns `Ok(false)` when node counts or value sets differ, and
/// `AmbiguousLabels` when the value sets agree but some value labels more than
/// one node. Otherwise the graphs are equal iff every node's neighbor values
/// match those of its counterpart. The two graphs may be different variants.
pub fn labeled_graph_eq<G1, G2, V>(g1: &G1, g2: &G2) -> GraphResult<bool>
where
    G1: GraphView<Value = V>,
    G2: GraphView<Value = V>,
    V: Eq + Hash,
{
    if g1.node_count() != g2.node_count() {
        return Ok(false);
    }
    let labels1 = label_map(g1);
    let labels2 = label_map(g2);
    if labels1.len() != labels2.len() || labels1.keys().any(|label| !labels2.contains_key(label)) {
        return Ok(false);
    }
    if labels1.len() < g1.node_count() || labels2.len() < g2.node_count() {
        return Err(GraphError::AmbiguousLabels);
    }

    for (label, &n1) in &labels1 {
        let Some(&n2) = labels2.get(label) else {
            return Ok(false);
        };
        if neighbor_labels(g1, n1) != neighbor_labels(g2, n2) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Index every node by its value, failing if any value repeats.
pub fn label_index<G>(graph: &G) -> GraphResult<HashMap<&G::Value, NodeId>>
where
    G: GraphView,
    G::Value: Eq + Hash,
{
    let labels = label_map(graph);
    if labels.len() < graph.node_count() {
        return Err(GraphError::AmbiguousLabels);
    }
    Ok(labels)
}

/// Find the single node carrying `label`.
pub fn find_by_label<G, Q>(graph: &G, label: &Q) -> GraphResult<NodeId>
where
    G: GraphView,
    G::Value: Borrow<Q>,
    Q: PartialEq + Display + ?Sized,
{
    let mut matches = graph
        .nodes()
        .filter(|&id| graph.value(id).is_some_and(|value| Borrow::<Q>::borrow(value) == label));
    match (matches.next(), matches.next()) {
        (Some(id), None) => Ok(id),
        (Some(_), Some(_)) => Err(GraphError::AmbiguousLabels),
        (None, _) => Err(GraphError::LabelNotFound(label.to_string())),
    }
}
