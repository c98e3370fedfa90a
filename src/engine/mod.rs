//! Query surfaces built on top of graph traversals.

pub mod paths;

pub use paths::BreadthFirstPaths;
