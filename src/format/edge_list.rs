//! Reads JSON edge lists into an undirected graph.
//!
//! An edge list is a JSON array of vertex pairs, each vertex a number or a
//! string: `[[0, 5], [4, 3], ["dog", "woof"], [0, "meow"]]`.

use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::graph::UndirectedGraph;
use crate::types::{DsError, DsResult, VertexId};

/// Reader for JSON edge-list files.
pub struct EdgeListReader;

impl EdgeListReader {
    /// Read an edge-list file into a graph.
    pub fn read_from_file(path: &Path) -> DsResult<UndirectedGraph> {
        let data = std::fs::read_to_string(path)?;
        Self::parse_str(&data)
    }

    /// Read from any reader into a graph.
    pub fn read_from(reader: &mut impl Read) -> DsResult<UndirectedGraph> {
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        Self::parse_str(&data)
    }

    /// Parse an edge list held in memory.
    pub fn parse_str(text: &str) -> DsResult<UndirectedGraph> {
        let value: Value = serde_json::from_str(text)?;
        let edges = Self::parse_edges(&value)?;
        log::debug!("Parsed {} edges", edges.len());
        Ok(UndirectedGraph::from_edges(edges))
    }

    /// Validate and canonicalize every pair without building a graph.
    pub fn parse_edges(value: &Value) -> DsResult<Vec<(VertexId, VertexId)>> {
        let entries = match value {
            Value::Array(entries) => entries,
            other => {
                return Err(DsError::InvalidEdgeList(format!(
                    "expected an array of edges, got {}",
                    other
                )))
            }
        };

        let mut edges = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            match entry.as_array().map(|pair| pair.as_slice()) {
                Some([a, b]) => {
                    edges.push((VertexId::try_from(a)?, VertexId::try_from(b)?));
                }
                _ => return Err(DsError::InvalidEdge { index }),
            }
        }
        Ok(edges)
    }
}
