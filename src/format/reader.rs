//! Reads the line-oriented text format into any graph variant.

use std::collections::HashMap;
use std::fmt::Display;
use std::io::Read;
use std::path::Path;

use crate::graph::GraphMut;
use crate::types::{GraphError, GraphResult, NodeId};

/// Get-or-create map from line-local identifiers to graph nodes.
///
/// The first reference to an identifier creates its node with a default
/// value, so neighbors may be declared before their own line appears.
struct IdMap<'t> {
    ids: HashMap<&'t str, NodeId>,
}

impl<'t> IdMap<'t> {
    fn new() -> Self {
        Self {
            ids: HashMap::new(),
        }
    }

    fn get_or_create<G>(&mut self, graph: &mut G, token: &'t str) -> NodeId
    where
        G: GraphMut,
        G::Value: Default,
    {
        *self
            .ids
            .entry(token)
            .or_insert_with(|| graph.add_node(G::Value::default()))
    }
}

/// Parse text of the form `<node_id> <value> <neighbor_id>*` per line.
///
/// Blank lines are skipped and whitespace runs collapse. Redundant edge
/// declarations (`DuplicateEdge`, `Loop`) are ignored; any other failure,
/// including a line without a value or a value `parse` rejects, fails the
/// whole call.
pub fn read_graph<G, F, E>(text: &str, mut parse: F) -> GraphResult<G>
where
    G: GraphMut + Default,
    G::Value: Default,
    F: FnMut(&str) -> Result<G::Value, E>,
    E: Display,
{
    let mut graph = G::default();
    let mut ids = IdMap::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let mut tokens = line.split_whitespace();
        let Some(node_token) = tokens.next() else {
            continue;
        };
        let value_token = tokens.next().ok_or_else(|| GraphError::MalformedInput {
            line: line_no,
            reason: format!("node {node_token:?} has no value"),
        })?;
        let value = parse(value_token).map_err(|e| GraphError::MalformedInput {
            line: line_no,
            reason: format!("invalid value {value_token:?}: {e}"),
        })?;

        let node = ids.get_or_create(&mut graph, node_token);
        graph.set_value(node, value)?;

        for neighbor_token in tokens {
            let neighbor = ids.get_or_create(&mut graph, neighbor_token);
            match graph.add_edge(node, neighbor) {
                Ok(()) => {}
                Err(e) if e.is_redundant_edge() => {
                    log::debug!(
                        "line {}: ignoring edge {} -> {}: {}",
                        line_no,
                        node_token,
                        neighbor_token,
                        e
                    );
                }
                Err(e) => return Err(e),
            }
        }
    }

    log::debug!(
        "read graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Read the text format from any reader.
pub fn read_graph_from<G, F, E>(reader: &mut impl Read, parse: F) -> GraphResult<G>
where
    G: GraphMut + Default,
    G::Value: Default,
    F: FnMut(&str) -> Result<G::Value, E>,
    E: Display,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    read_graph(&text, parse)
}

/// Read the text format from a file.
pub fn read_graph_file<G, F, E>(path: &Path, parse: F) -> GraphResult<G>
where
    G: GraphMut + Default,
    G::Value: Default,
    F: FnMut(&str) -> Result<G::Value, E>,
    E: Display,
{
    let text = std::fs::read_to_string(path)?;
    read_graph(&text, parse)
}
