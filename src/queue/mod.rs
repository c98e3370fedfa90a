//! Priority queues.

pub mod min_table;

pub use min_table::{HeapNode, MinPQTable};
