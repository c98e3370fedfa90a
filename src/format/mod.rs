//! Edge-list file input.

pub mod edge_list;

pub use edge_list::EdgeListReader;
