//! Shared data types for the adjacency-matrix library.

pub mod edge;
pub mod error;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};

/// Separator between values on a rendered matrix row.
pub const MATRIX_SEPARATOR: &str = " ";

/// DOT keyword opening an undirected graph.
pub const DOT_GRAPH: &str = "graph";

/// DOT keyword opening a directed graph.
pub const DOT_DIGRAPH: &str = "digraph";

/// DOT operator joining the endpoints of an undirected edge.
pub const DOT_UNDIRECTED_OP: &str = "--";

/// DOT operator joining the endpoints of a directed edge.
pub const DOT_DIRECTED_OP: &str = "->";
