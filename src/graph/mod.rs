//! Undirected graphs and breadth-first traversal.

pub mod builder;
pub mod traversal;
pub mod undirected;

pub use builder::GraphBuilder;
pub use traversal::{bfs_tree, BfsTree};
pub use undirected::UndirectedGraph;

use crate::types::VertexId;

/// Read-only view of a graph: which vertices exist and who their
/// neighbors are. Identifiers are always canonical.
pub trait Adjacency {
    /// Whether the vertex exists in the graph.
    fn contains_vertex(&self, vertex: &VertexId) -> bool;

    /// Neighbors of a vertex in adjacency order. Unknown vertices have none.
    fn neighbors(&self, vertex: &VertexId) -> &[VertexId];
}
