//! Graph traversal algorithms (BFS).

use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::{DsError, DsResult, VertexId};

use super::Adjacency;

/// Everything a single BFS from `source` discovers.
#[derive(Debug, Clone)]
pub struct BfsTree {
    /// Canonical source vertex.
    pub source: VertexId,
    /// Reachable vertices, the source included.
    pub visited: HashSet<VertexId>,
    /// Visited vertices in discovery order, starting with the source.
    pub order: Vec<VertexId>,
    /// Vertex each visited vertex was discovered from. The source has no entry.
    pub parent: HashMap<VertexId, VertexId>,
    /// Hop count from the source.
    pub distance: HashMap<VertexId, u32>,
}

/// Breadth-first search from `source`.
///
/// A vertex is marked visited before it is enqueued, so self-loops and
/// repeated edges never enqueue anything twice and every vertex gets the
/// distance of the first (shortest) discovery.
pub fn bfs_tree<G>(graph: &G, source: &VertexId) -> DsResult<BfsTree>
where
    G: Adjacency + ?Sized,
{
    if !graph.contains_vertex(source) {
        return Err(DsError::VertexNotFound(source.to_string()));
    }

    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut order: Vec<VertexId> = Vec::new();
    let mut parent: HashMap<VertexId, VertexId> = HashMap::new();
    let mut distance: HashMap<VertexId, u32> = HashMap::new();
    let mut queue: VecDeque<(VertexId, u32)> = VecDeque::new();

    visited.insert(source.clone());
    order.push(source.clone());
    distance.insert(source.clone(), 0);
    queue.push_back((source.clone(), 0));

    while let Some((current, depth)) = queue.pop_front() {
        for neighbor in graph.neighbors(&current) {
            if visited.contains(neighbor) {
                continue;
            }
            visited.insert(neighbor.clone());
            order.push(neighbor.clone());
            parent.insert(neighbor.clone(), current.clone());
            distance.insert(neighbor.clone(), depth + 1);
            queue.push_back((neighbor.clone(), depth + 1));
        }
    }

    log::debug!("BFS from {} reached {} vertices", source, visited.len());

    Ok(BfsTree {
        source: source.clone(),
        visited,
        order,
        parent,
        distance,
    })
}
