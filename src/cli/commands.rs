//! CLI command implementations.

use std::path::Path;

use crate::engine::BreadthFirstPaths;
use crate::format::EdgeListReader;
use crate::queue::MinPQTable;
use crate::types::{DsResult, Key};

/// Run BFS from `source` and print distances, plus the path to `target`.
pub fn cmd_paths(path: &Path, source: &str, target: Option<&str>, json: bool) -> DsResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;
    let paths = BreadthFirstPaths::new(&graph, source)?;
    let route = target.map(|t| paths.shortest_path_to(t));

    if json {
        let vertices: Vec<serde_json::Value> = paths
            .visit_order()
            .iter()
            .map(|v| {
                serde_json::json!({
                    "vertex": v,
                    "distance": paths.distance_to(v),
                    "parent": paths.parent_of(v),
                })
            })
            .collect();
        let mut report = serde_json::json!({
            "source": paths.source_vertex(),
            "reachable": paths.reachable_count(),
            "vertices": vertices,
        });
        if let Some(route) = &route {
            report["path"] = serde_json::json!(route);
        }
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else {
        println!("Source: {}", paths.source_vertex());
        println!(
            "Reachable: {} of {} vertices",
            paths.reachable_count(),
            graph.vertex_count()
        );
        for v in paths.visit_order() {
            let distance = paths.distance_to(v).unwrap_or(0);
            let indent = "  ".repeat(distance as usize);
            match paths.parent_of(v) {
                Some(parent) => println!("{}[distance {}] {} (via {})", indent, distance, v, parent),
                None => println!("{}[distance {}] {}", indent, distance, v),
            }
        }
        if let (Some(target), Some(route)) = (target, &route) {
            match route {
                Some(route) => {
                    let hops: Vec<&str> = route.iter().map(|v| v.as_str()).collect();
                    println!("Path to {}: {}", target, hops.join(" <- "));
                }
                None => println!("No path to {}", target),
            }
        }
    }
    Ok(())
}

/// Display vertex and edge counts of an edge-list file.
pub fn cmd_info(path: &Path, json: bool) -> DsResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "self_loops": graph.self_loop_count(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        println!("Self-loops: {}", graph.self_loop_count());
    }
    Ok(())
}

/// Push every key through a MinPQTable and print them in extraction order.
pub fn cmd_sort(keys: &[String], json: bool) -> DsResult<()> {
    let mut table = MinPQTable::with_capacity(keys.len());
    for (i, raw) in keys.iter().enumerate() {
        table.insert(parse_key(raw)?, i)?;
    }
    let sorted = table.into_sorted_vec();

    if json {
        let out: Vec<&Key> = sorted.iter().map(|n| &n.key).collect();
        println!("{}", serde_json::to_string(&out).unwrap_or_default());
    } else {
        for node in &sorted {
            println!("{}", node.key);
        }
    }
    Ok(())
}

/// Interpret a command-line word as a key: a finite number when it parses
/// as one, otherwise a string.
pub fn parse_key(raw: &str) -> DsResult<Key> {
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Key::number(n),
        _ => Ok(Key::text(raw)),
    }
}
