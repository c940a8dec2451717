//! Error types for the adjacency-matrix library.

use std::collections::TryReserveError;

use thiserror::Error;

/// All errors that can occur while building or rendering a graph.
///
/// Invalid node indices are not errors: edge queries on them read `false`
/// and edge mutations on them leave the graph unchanged.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A graph must have at least one node.
    #[error("Cannot create an empty graph. Graph must have at least one node")]
    EmptyGraph,

    /// Adjacency storage could not be allocated.
    #[error("Could not allocate adjacency storage for {nodes} nodes: {source}")]
    Allocation {
        nodes: usize,
        #[source]
        source: TryReserveError,
    },

    /// IO error while rendering.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
