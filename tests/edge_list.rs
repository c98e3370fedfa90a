//! Edge-list parsing and CLI command tests.

use std::io::{Cursor, Write};

use dskit::cli::commands::{cmd_info, cmd_paths, cmd_sort, parse_key};
use dskit::engine::BreadthFirstPaths;
use dskit::format::EdgeListReader;
use dskit::types::{DsError, Key};

use tempfile::NamedTempFile;

const REFERENCE_EDGES: &str = r#"[
    [0, 5], [4, 3], [0, 1], [9, 12], [6, 4], [5, 4], [0, 2], [11, 12],
    [9, 10], [0, 6], [7, 8], [9, 11], [5, 3], [5, 5], [14, 14]
]"#;

fn edge_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ==================== Parsing Tests ====================

#[test]
fn test_parse_reference_graph() {
    let graph = EdgeListReader::parse_str(REFERENCE_EDGES).unwrap();
    assert_eq!(graph.vertex_count(), 14);
    assert_eq!(graph.edge_count(), 15);
    assert_eq!(graph.self_loop_count(), 2);

    let paths = BreadthFirstPaths::new(&graph, 0).unwrap();
    assert_eq!(paths.reachable_count(), 7);
    assert_eq!(paths.distance_to(4), Some(2));
}

#[test]
fn test_parse_mixed_types() {
    let text = r#"[["dog", "woof"], ["dog", "bark"], [0, "meow"], ["meow", "cat"], [14, "dog"]]"#;
    let graph = EdgeListReader::parse_str(text).unwrap();
    let paths = BreadthFirstPaths::new(&graph, "0").unwrap();
    assert!(paths.has_path_to("cat").unwrap());
    assert!(!paths.has_path_to(14).unwrap());
}

#[test]
fn test_parse_float_vertex_canonicalized() {
    let graph = EdgeListReader::parse_str("[[1.0, 2.5]]").unwrap();
    assert!(graph.has_vertex(1));
    assert!(graph.has_vertex("2.5"));
}

#[test]
fn test_read_from_reader() {
    let mut cursor = Cursor::new(REFERENCE_EDGES.as_bytes());
    let graph = EdgeListReader::read_from(&mut cursor).unwrap();
    assert_eq!(graph.vertex_count(), 14);
}

#[test]
fn test_read_from_file() {
    let file = edge_file(REFERENCE_EDGES);
    let graph = EdgeListReader::read_from_file(file.path()).unwrap();
    assert_eq!(graph.edge_count(), 15);
}

#[test]
fn test_empty_list_is_empty_graph() {
    let graph = EdgeListReader::parse_str("[]").unwrap();
    assert!(graph.is_empty());
    assert!(matches!(
        BreadthFirstPaths::new(&graph, 0),
        Err(DsError::VertexNotFound(_))
    ));
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        EdgeListReader::parse_str("[[0, 1]"),
        Err(DsError::Json(_))
    ));
}

#[test]
fn test_not_an_array() {
    assert!(matches!(
        EdgeListReader::parse_str(r#"{"edges": []}"#),
        Err(DsError::InvalidEdgeList(_))
    ));
}

#[test]
fn test_edge_not_a_pair() {
    match EdgeListReader::parse_str("[[0, 1], [2, 3, 4]]") {
        Err(DsError::InvalidEdge { index }) => assert_eq!(index, 1),
        other => panic!("Expected InvalidEdge error, got {:?}", other.map(|g| g.edge_count())),
    }
    assert!(matches!(
        EdgeListReader::parse_str("[7]"),
        Err(DsError::InvalidEdge { index: 0 })
    ));
}

#[test]
fn test_vertex_of_wrong_type() {
    assert!(matches!(
        EdgeListReader::parse_str(r#"[[0, {"id": 1}]]"#),
        Err(DsError::InvalidVertex(_))
    ));
    assert!(matches!(
        EdgeListReader::parse_str("[[true, 1]]"),
        Err(DsError::InvalidVertex(_))
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    assert!(matches!(
        EdgeListReader::read_from_file(&missing),
        Err(DsError::Io(_))
    ));
}

// ==================== CLI Command Tests ====================

#[test]
fn test_cmd_paths() {
    let file = edge_file(REFERENCE_EDGES);
    cmd_paths(file.path(), "0", Some("4"), false).unwrap();
    cmd_paths(file.path(), "0", Some("11"), true).unwrap();
}

#[test]
fn test_cmd_paths_unknown_source() {
    let file = edge_file(REFERENCE_EDGES);
    assert!(matches!(
        cmd_paths(file.path(), "42", None, false),
        Err(DsError::VertexNotFound(_))
    ));
}

#[test]
fn test_cmd_info() {
    let file = edge_file(REFERENCE_EDGES);
    cmd_info(file.path(), false).unwrap();
    cmd_info(file.path(), true).unwrap();
}

#[test]
fn test_cmd_sort() {
    let keys: Vec<String> = ["14", "pear", "6", "apple", "8.5"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    cmd_sort(&keys, false).unwrap();
    cmd_sort(&keys, true).unwrap();
}

#[test]
fn test_parse_key() {
    assert_eq!(parse_key("6").unwrap(), Key::from(6));
    assert_eq!(parse_key("-2.5").unwrap(), Key::number(-2.5).unwrap());
    assert_eq!(parse_key("pear").unwrap(), Key::from("pear"));
    // words that only parse to non-finite numbers stay strings
    assert_eq!(parse_key("NaN").unwrap(), Key::from("NaN"));
    assert_eq!(parse_key("inf").unwrap(), Key::from("inf"));
}
