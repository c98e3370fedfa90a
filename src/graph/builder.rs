//! Fluent API for building UndirectedGraph instances.

use crate::types::VertexId;

use super::UndirectedGraph;

/// Fluent builder for constructing an [`UndirectedGraph`] from mixed
/// vertex types.
///
/// ```
/// use dskit::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// builder.link(0, "meow").link("meow", "cat");
/// let graph = builder.build();
/// assert!(graph.has_vertex("0"));
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    edges: Vec<(VertexId, VertexId)>,
}

impl GraphBuilder {
    /// Create a new builder with no edges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an undirected edge between two vertices.
    pub fn link(&mut self, a: impl Into<VertexId>, b: impl Into<VertexId>) -> &mut Self {
        self.edges.push((a.into(), b.into()));
        self
    }

    /// Number of edges recorded so far, duplicates included.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Build the graph.
    pub fn build(self) -> UndirectedGraph {
        UndirectedGraph::from_edges(self.edges)
    }
}
