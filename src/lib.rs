//! dskit: a binary min-heap priority queue and breadth-first shortest paths
//! over unweighted undirected graphs.
//!
//! Vertices are identified by a canonical string form, so `0` and `"0"`
//! name the same vertex. Priority keys are finite numbers or strings.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod queue;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::BreadthFirstPaths;
pub use format::EdgeListReader;
pub use graph::{bfs_tree, Adjacency, BfsTree, GraphBuilder, UndirectedGraph};
pub use queue::{HeapNode, MinPQTable};
pub use types::{DsError, DsResult, IntoKey, Key, VertexId};
