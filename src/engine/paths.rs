//! Shortest-hop paths from a single source vertex.

use std::collections::{HashMap, HashSet};

use crate::graph::{bfs_tree, Adjacency, BfsTree, UndirectedGraph};
use crate::types::{DsError, DsResult, VertexId};

/// Shortest paths from one source vertex in an unweighted undirected graph.
///
/// The whole traversal runs in [`BreadthFirstPaths::new`]; every query
/// afterwards is a read over the recorded visited set, parent links and
/// distances. The graph is borrowed for the lifetime of the result and
/// never modified.
#[derive(Debug)]
pub struct BreadthFirstPaths<'g, G: ?Sized = UndirectedGraph> {
    source_vertex: VertexId,
    visited: HashSet<VertexId>,
    visit_order: Vec<VertexId>,
    parent: HashMap<VertexId, VertexId>,
    distance_from_source: HashMap<VertexId, u32>,
    graph: &'g G,
}

impl<'g, G> BreadthFirstPaths<'g, G>
where
    G: Adjacency + ?Sized,
{
    /// Run BFS over `graph` from `source`.
    ///
    /// Fails with [`DsError::VertexNotFound`] when the canonical source is
    /// not a vertex of the graph.
    pub fn new(graph: &'g G, source: impl Into<VertexId>) -> DsResult<Self> {
        let source = source.into();
        let BfsTree {
            source,
            visited,
            order,
            parent,
            distance,
        } = bfs_tree(graph, &source)?;

        Ok(Self {
            source_vertex: source,
            visited,
            visit_order: order,
            parent,
            distance_from_source: distance,
            graph,
        })
    }

    /// Canonical form of the source vertex.
    pub fn source_vertex(&self) -> &VertexId {
        &self.source_vertex
    }

    /// Every vertex reachable from the source, the source included.
    pub fn visited(&self) -> &HashSet<VertexId> {
        &self.visited
    }

    /// Visited vertices in BFS discovery order.
    pub fn visit_order(&self) -> &[VertexId] {
        &self.visit_order
    }

    pub fn reachable_count(&self) -> usize {
        self.visited.len()
    }

    /// The graph this traversal ran over.
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// The vertex `vertex` was discovered from. `None` for the source and
    /// for unreachable vertices.
    pub fn parent_of(&self, vertex: impl Into<VertexId>) -> Option<&VertexId> {
        self.parent.get(&vertex.into())
    }

    /// Hop count from the source, or `None` when no path exists.
    pub fn distance_to(&self, vertex: impl Into<VertexId>) -> Option<u32> {
        self.distance_from_source.get(&vertex.into()).copied()
    }

    /// Whether the vertex is reachable from the source.
    ///
    /// A vertex missing from the graph altogether is an error, unlike a
    /// vertex that exists but sits in another component.
    pub fn has_path_to(&self, vertex: impl Into<VertexId>) -> DsResult<bool> {
        let vertex = vertex.into();
        if !self.graph.contains_vertex(&vertex) {
            return Err(DsError::VertexNotFound(vertex.into_string()));
        }
        Ok(self.visited.contains(&vertex))
    }

    /// Path from `vertex` back to the source, both ends included, or
    /// `None` when no path exists.
    pub fn shortest_path_to(&self, vertex: impl Into<VertexId>) -> Option<Vec<VertexId>> {
        let vertex = vertex.into();
        if !self.visited.contains(&vertex) {
            return None;
        }

        let mut path = vec![vertex];
        while let Some(parent) = path.last().and_then(|v| self.parent.get(v)) {
            path.push(parent.clone());
        }
        Some(path)
    }
}
