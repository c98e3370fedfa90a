//! Error types for the dskit library.

use thiserror::Error;

/// All errors that can occur in the dskit library.
#[derive(Error, Debug)]
pub enum DsError {
    /// Priority key is not a finite number or a string.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// deleteMin or peekMin on a queue with no elements.
    #[error("Structure is empty")]
    EmptyStructure,

    /// Vertex is not present anywhere in the graph.
    #[error("Vertex {0:?} not found in graph")]
    VertexNotFound(String),

    /// Edge-list entry holds a vertex that is neither a number nor a string.
    #[error("Invalid vertex: {0}")]
    InvalidVertex(String),

    /// Edge-list document is not an array of edges.
    #[error("Invalid edge list: {0}")]
    InvalidEdgeList(String),

    /// Edge-list entry is not a pair.
    #[error("Edge {index} is not a pair of vertices")]
    InvalidEdge { index: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for dskit operations.
pub type DsResult<T> = Result<T, DsError>;
