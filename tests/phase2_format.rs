//! Phase 2 tests: text format reading and writing.

use std::io::{Cursor, Write};

use tempfile::NamedTempFile;

use labgraph::engine::{find_by_label, labeled_graph_eq};
use labgraph::format::{
    read_graph, read_graph_file, read_graph_from, write_graph, write_graph_file, write_graph_to,
};
use labgraph::graph::{DirectedGraph, GraphMut, GraphView, ReverseGraph, UndirectedGraph};
use labgraph::types::{GraphError, GraphResult};

const SCENARIO: &str = "0 A 0 1 2
    1 B
    2 C 1
    3 D";

fn make_test_graph<G>() -> G
where
    G: GraphMut<Value = String> + Default,
{
    let mut g = G::default();
    let a = g.add_node("A".to_string());
    let b = g.add_node("B".to_string());
    let c = g.add_node("C".to_string());
    g.add_node("D".to_string());
    for (tail, head) in [(a, a), (a, b), (a, c), (c, b)] {
        let _ = g.add_edge(tail, head);
    }
    g
}

fn read_strings<G>(text: &str) -> GraphResult<G>
where
    G: GraphMut<Value = String> + Default,
{
    read_graph(text, str::parse::<String>)
}

fn serialization_roundtrip<G>()
where
    G: GraphMut<Value = String> + Default,
{
    let g: G = make_test_graph();
    let parsed: G = read_strings(SCENARIO).unwrap();
    assert!(labeled_graph_eq(&parsed, &g).unwrap());

    let text = write_graph(&g).unwrap();
    let reread: G = read_strings(&text).unwrap();
    assert!(labeled_graph_eq(&reread, &g).unwrap());
}

// ==================== Scenario Tests ====================

#[test]
fn test_scenario_parses_to_expected_edges() {
    let g: DirectedGraph<String> = read_strings(SCENARIO).unwrap();
    assert_eq!(g.node_count(), 4);
    assert_eq!(g.edge_count(), 4);

    let a = find_by_label(&g, "A").unwrap();
    let b = find_by_label(&g, "B").unwrap();
    let c = find_by_label(&g, "C").unwrap();
    let d = find_by_label(&g, "D").unwrap();
    assert!(g.contains_edge(a, a));
    assert!(g.contains_edge(a, b));
    assert!(g.contains_edge(a, c));
    assert!(g.contains_edge(c, b));
    assert_eq!(g.neighbors(b).unwrap().count(), 0);
    assert_eq!(g.neighbors(d).unwrap().count(), 0);
}

#[test]
fn test_roundtrip_directed() {
    serialization_roundtrip::<DirectedGraph<String>>();
}

#[test]
fn test_roundtrip_undirected() {
    serialization_roundtrip::<UndirectedGraph<String>>();
}

#[test]
fn test_roundtrip_reverse() {
    serialization_roundtrip::<ReverseGraph<String>>();
}

#[test]
fn test_undirected_scenario_drops_loop() {
    let g: UndirectedGraph<String> = read_strings(SCENARIO).unwrap();
    let a = find_by_label(&g, "A").unwrap();
    let b = find_by_label(&g, "B").unwrap();
    assert!(!g.contains_edge(a, a));
    assert!(g.contains_edge(b, a));
    assert_eq!(g.edge_count(), 3);
}

// ==================== Parsing Edge Cases ====================

#[test]
fn test_ids_are_arbitrary_tokens() {
    let text = "zeta X alpha\n\n\nalpha Y   zeta\t zeta\n";
    let g: DirectedGraph<String> = read_strings(text).unwrap();
    let x = find_by_label(&g, "X").unwrap();
    let y = find_by_label(&g, "Y").unwrap();
    assert!(g.contains_edge(x, y));
    assert!(g.contains_edge(y, x));
    // The repeated declaration of y -> x is absorbed.
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn test_numeric_values() {
    let g: DirectedGraph<i64> = read_graph("0 -5 1\n1 12", str::parse::<i64>).unwrap();
    let text = write_graph(&g).unwrap();
    assert_eq!(text, "0 -5 1\n1 12\n");
}

#[test]
fn test_malformed_line_fails_whole_read() {
    let result: GraphResult<DirectedGraph<String>> = read_strings("0 A 1\n1\n");
    match result {
        Err(GraphError::MalformedInput { line, reason }) => {
            assert_eq!(line, 2);
            assert!(reason.contains("no value"));
        }
        other => panic!("Expected MalformedInput, got {:?}", other.map(|g| g.node_count())),
    }
}

#[test]
fn test_empty_input_gives_empty_graph() {
    let g: ReverseGraph<String> = read_strings("\n   \n").unwrap();
    assert_eq!(g.node_count(), 0);
    assert_eq!(write_graph(&g).unwrap(), "");
}

// ==================== Stream and File Tests ====================

#[test]
fn test_read_from_reader() {
    let mut cursor = Cursor::new(SCENARIO.as_bytes().to_vec());
    let g: DirectedGraph<String> = read_graph_from(&mut cursor, str::parse::<String>).unwrap();
    assert!(labeled_graph_eq(&g, &make_test_graph::<DirectedGraph<String>>()).unwrap());
}

#[test]
fn test_write_to_buffer() {
    let g: DirectedGraph<String> = make_test_graph();
    let mut buf = Vec::new();
    write_graph_to(&g, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), write_graph(&g).unwrap());
}

#[test]
fn test_file_roundtrip() {
    let g: ReverseGraph<String> = make_test_graph();
    let tmp = NamedTempFile::new().unwrap();
    write_graph_file(&g, tmp.path()).unwrap();

    let loaded: ReverseGraph<String> = read_graph_file(tmp.path(), str::parse::<String>).unwrap();
    assert!(labeled_graph_eq(&loaded, &g).unwrap());
}

#[test]
fn test_failed_file_write_keeps_old_contents() {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(b"0 keep\n").unwrap();
    tmp.flush().unwrap();

    let mut g: DirectedGraph<String> = DirectedGraph::new();
    g.add_node("bad value".to_string());
    let result = write_graph_file(&g, tmp.path());
    assert!(matches!(result, Err(GraphError::UnwritableValue(_))));
    assert_eq!(std::fs::read_to_string(tmp.path()).unwrap(), "0 keep\n");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.graph");
    let result: GraphResult<DirectedGraph<String>> =
        read_graph_file(&path, str::parse::<String>);
    assert!(matches!(result, Err(GraphError::Io(_))));
}
