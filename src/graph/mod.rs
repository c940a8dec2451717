//! Adjacency-matrix graphs: storage, the two operation sets, and the
//! directedness-selected `Graph`.

pub mod adj_graph;
pub mod builder;
pub mod directed;
pub mod matrix;
pub mod undirected;

pub use adj_graph::Graph;
pub use builder::GraphBuilder;
pub use directed::Digraph;
pub use matrix::AdjacencyMatrix;
pub use undirected::UGraph;

use crate::types::Edge;

/// Operations shared by every simple graph over a fixed node set `0..n`.
///
/// Node indices outside `0..node_count()` never fail: queries read `false`
/// and mutations leave the graph unchanged. Self loops are never stored.
pub trait SimpleGraph {
    /// Number of nodes, fixed at construction.
    fn node_count(&self) -> usize;

    /// Whether edges are ordered pairs.
    fn is_directed(&self) -> bool;

    /// Whether `u` is a node of this graph.
    fn has_node(&self, u: usize) -> bool {
        u < self.node_count()
    }

    /// Whether the edge `u`–`v` (or arc `u -> v`) is present.
    fn has_edge(&self, u: usize, v: usize) -> bool;

    /// Insert an edge. Returns `true` if the edge set changed.
    fn add_edge(&mut self, u: usize, v: usize) -> bool;

    /// Remove an edge. Returns `true` if the edge set changed.
    fn remove_edge(&mut self, u: usize, v: usize) -> bool;

    /// Number of present edges, each counted once.
    fn edge_count(&self) -> usize;

    /// All present edges in storage scan order.
    fn edges(&self) -> Vec<Edge>;
}
