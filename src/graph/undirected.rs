//! Unweighted undirected graph keyed by canonical vertex identifiers.

use std::collections::HashMap;

use crate::types::VertexId;

use super::Adjacency;

/// An unweighted undirected graph built once from a list of vertex pairs.
///
/// Adjacency lists keep insertion order and never hold the same neighbor
/// twice, so repeated edges collapse into one. A self-loop `(v, v)` lists
/// `v` once among its own neighbors.
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    /// Neighbors of each vertex, in the order the edges were added.
    adjacency: HashMap<VertexId, Vec<VertexId>>,
    /// Vertices in first-seen order.
    vertices: Vec<VertexId>,
    /// Distinct undirected edges, self-loops included.
    edge_count: usize,
    self_loops: usize,
}

impl UndirectedGraph {
    /// Create a graph with no vertices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(a, b)` pairs. Each endpoint may be any type that
    /// canonicalizes into a [`VertexId`].
    pub fn from_edges<I, A, B>(edges: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<VertexId>,
        B: Into<VertexId>,
    {
        let mut graph = Self::new();
        for (a, b) in edges {
            graph.add_edge(a.into(), b.into());
        }
        graph
    }

    /// Build from two-element arrays of a single vertex type, e.g. `[[0, 5], [4, 3]]`.
    pub fn from_pairs<I, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = [V; 2]>,
        V: Into<VertexId>,
    {
        Self::from_edges(pairs.into_iter().map(|[a, b]| (a, b)))
    }

    pub(crate) fn add_edge(&mut self, a: VertexId, b: VertexId) {
        self.ensure_vertex(&a);
        self.ensure_vertex(&b);

        if a == b {
            let list = self.adjacency.entry(a.clone()).or_default();
            if !list.contains(&a) {
                log::warn!("Self-loop on vertex {}", a);
                list.push(a);
                self.edge_count += 1;
                self.self_loops += 1;
            }
            return;
        }

        let list = self.adjacency.entry(a.clone()).or_default();
        if list.contains(&b) {
            return;
        }
        list.push(b.clone());
        self.adjacency.entry(b).or_default().push(a);
        self.edge_count += 1;
    }

    fn ensure_vertex(&mut self, v: &VertexId) {
        if !self.adjacency.contains_key(v) {
            self.adjacency.insert(v.clone(), Vec::new());
            self.vertices.push(v.clone());
        }
    }

    /// Whether the vertex appears in any edge.
    pub fn has_vertex(&self, vertex: impl Into<VertexId>) -> bool {
        self.adjacency.contains_key(&vertex.into())
    }

    /// Neighbors of a vertex in adjacency order. Empty for unknown vertices.
    pub fn neighbors_of(&self, vertex: impl Into<VertexId>) -> &[VertexId] {
        self.neighbors(&vertex.into())
    }

    /// Number of neighbors of a vertex, a self-loop counting once.
    pub fn degree(&self, vertex: impl Into<VertexId>) -> usize {
        self.neighbors_of(vertex).len()
    }

    /// All vertices in first-seen order.
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn self_loop_count(&self) -> usize {
        self.self_loops
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl Adjacency for UndirectedGraph {
    fn contains_vertex(&self, vertex: &VertexId) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn neighbors(&self, vertex: &VertexId) -> &[VertexId] {
        self.adjacency
            .get(vertex)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }
}
