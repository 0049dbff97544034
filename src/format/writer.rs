//! Writes any graph variant in the line-oriented text format.

use std::collections::HashMap;
use std::fmt::Display;
use std::io::Write;
use std::path::Path;

use crate::graph::GraphView;
use crate::types::{GraphError, GraphResult, NodeId};

/// Serialize a graph as `<id> <value> <neighbor_id>*` lines.
///
/// Ids are assigned fresh for this call by enumerating `graph.nodes()`; they
/// bear no relation to the ids of the text a graph was read from. Neighbor
/// ids on a line are ascending.
pub fn write_graph<G>(graph: &G) -> GraphResult<String>
where
    G: GraphView,
    G::Value: Display,
{
    let ids: HashMap<NodeId, usize> = graph
        .nodes()
        .enumerate()
        .map(|(line_id, node)| (node, line_id))
        .collect();

    let mut output = String::new();
    for (line_id, id) in graph.nodes().enumerate() {
        let Some(node) = graph.node(id) else {
            continue;
        };
        let token = node.value().to_string();
        if token.is_empty() || token.chars().any(char::is_whitespace) {
            return Err(GraphError::UnwritableValue(token));
        }

        let mut neighbors: Vec<usize> = node.adj().filter_map(|n| ids.get(&n).copied()).collect();
        neighbors.sort_unstable();

        output.push_str(&line_id.to_string());
        output.push(' ');
        output.push_str(&token);
        for neighbor in neighbors {
            output.push(' ');
            output.push_str(&neighbor.to_string());
        }
        output.push('\n');
    }
    Ok(output)
}

/// Write a graph to any writer.
pub fn write_graph_to<G>(graph: &G, writer: &mut impl Write) -> GraphResult<()>
where
    G: GraphView,
    G::Value: Display,
{
    let text = write_graph(graph)?;
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Write a graph to a file, replacing its contents.
///
/// The text is built before the file is opened, so a graph that cannot be
/// serialized leaves an existing file untouched.
pub fn write_graph_file<G>(graph: &G, path: &Path) -> GraphResult<()>
where
    G: GraphView,
    G::Value: Display,
{
    let text = write_graph(graph)?;
    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    log::debug!("wrote {} nodes to {}", graph.node_count(), path.display());
    Ok(())
}
