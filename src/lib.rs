//! adj-matrix — simple graphs backed by an adjacency matrix.
//!
//! Undirected graphs keep only the lower triangle of the matrix; directed
//! graphs keep the full square. Both render as a raw 0/1 matrix or as a DOT
//! description, and both are also reachable through a C ABI.

pub mod cli;
pub mod ffi;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{render_dot, render_matrix, write_dot, write_matrix, GraphSnapshot};
pub use graph::{AdjacencyMatrix, Digraph, Graph, GraphBuilder, SimpleGraph, UGraph};
pub use types::{Edge, GraphError, GraphResult};
