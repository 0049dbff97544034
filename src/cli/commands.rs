//! CLI command implementations.
//!
//! Every command is generic over the graph variant; the binary picks the
//! variant from `--kind`. Files hold string labels.

use std::path::Path;

use crate::engine::{find_by_label, labeled_graph_eq, GraphStats};
use crate::format::{read_graph_file, write_graph, write_graph_file};
use crate::graph::GraphMut;
use crate::types::{GraphError, GraphResult};

fn load<G>(path: &Path) -> GraphResult<G>
where
    G: GraphMut<Value = String> + Default,
{
    read_graph_file(path, str::parse::<String>)
}

/// Display statistics about a graph file.
pub fn cmd_info<G>(path: &Path, json: bool) -> GraphResult<()>
where
    G: GraphMut<Value = String> + Default,
{
    let graph: G = load(path)?;
    let stats = GraphStats::collect(&graph);

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "stats": stats,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Nodes: {}", stats.nodes);
        println!("Edges: {}", stats.edges);
        println!("Loops: {}", stats.loops);
        println!("Isolated: {}", stats.isolated);
        println!("Max out-degree: {}", stats.max_out_degree);
        println!("Loops allowed: {}", stats.allow_loops);
    }
    Ok(())
}

/// Re-read a graph file and write it back with freshly numbered ids.
pub fn cmd_normalize<G>(path: &Path, output: Option<&Path>) -> GraphResult<()>
where
    G: GraphMut<Value = String> + Default,
{
    let graph: G = load(path)?;
    match output {
        Some(out) => write_graph_file(&graph, out)?,
        None => print!("{}", write_graph(&graph)?),
    }
    Ok(())
}

/// Compare two graph files by label. Returns whether they are equal.
pub fn cmd_compare<G>(left: &Path, right: &Path, json: bool) -> GraphResult<bool>
where
    G: GraphMut<Value = String> + Default,
{
    let g1: G = load(left)?;
    let g2: G = load(right)?;
    let equal = labeled_graph_eq(&g1, &g2)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "left": left.display().to_string(),
                "right": right.display().to_string(),
                "equal": equal,
            })
        );
    } else if equal {
        println!("{} and {} are equal", left.display(), right.display());
    } else {
        println!("{} and {} differ", left.display(), right.display());
    }
    Ok(equal)
}

/// Add a node with a label not yet used in the file.
pub fn cmd_add_node<G>(path: &Path, label: &str, json: bool) -> GraphResult<()>
where
    G: GraphMut<Value = String> + Default,
{
    let mut graph: G = load(path)?;
    match find_by_label(&graph, label) {
        Ok(_) => return Err(GraphError::LabelExists(label.to_string())),
        Err(GraphError::LabelNotFound(_)) => {}
        Err(e) => return Err(e),
    }
    graph.add_node(label.to_string());
    write_graph_file(&graph, path)?;

    if json {
        println!("{}", serde_json::json!({"added": label, "nodes": graph.node_count()}));
    } else {
        println!("Added node {} to {}", label, path.display());
    }
    Ok(())
}

/// Remove the node carrying `label` and its edges.
pub fn cmd_remove_node<G>(path: &Path, label: &str, json: bool) -> GraphResult<()>
where
    G: GraphMut<Value = String> + Default,
{
    let mut graph: G = load(path)?;
    let id = find_by_label(&graph, label)?;
    graph.remove_node(id)?;
    write_graph_file(&graph, path)?;

    if json {
        println!("{}", serde_json::json!({"removed": label, "nodes": graph.node_count()}));
    } else {
        println!("Removed node {} from {}", label, path.display());
    }
    Ok(())
}

/// Add the edge `tail -> head`, both given by label.
pub fn cmd_add_edge<G>(path: &Path, tail: &str, head: &str, json: bool) -> GraphResult<()>
where
    G: GraphMut<Value = String> + Default,
{
    let mut graph: G = load(path)?;
    let t = find_by_label(&graph, tail)?;
    let h = find_by_label(&graph, head)?;
    graph.add_edge(t, h)?;
    write_graph_file(&graph, path)?;

    if json {
        println!("{}", serde_json::json!({"tail": tail, "head": head, "edges": graph.edge_count()}));
    } else {
        println!("Linked {} --> {}", tail, head);
    }
    Ok(())
}

/// Remove the edge `tail -> head`, both given by label.
pub fn cmd_remove_edge<G>(path: &Path, tail: &str, head: &str, json: bool) -> GraphResult<()>
where
    G: GraphMut<Value = String> + Default,
{
    let mut graph: G = load(path)?;
    let t = find_by_label(&graph, tail)?;
    let h = find_by_label(&graph, head)?;
    graph.remove_edge(t, h)?;
    write_graph_file(&graph, path)?;

    if json {
        println!("{}", serde_json::json!({"tail": tail, "head": head, "edges": graph.edge_count()}));
    } else {
        println!("Unlinked {} --> {}", tail, head);
    }
    Ok(())
}
