//! Fluent API for building graphs.

use crate::types::{Edge, GraphResult};

use super::{Graph, SimpleGraph};

/// Fluent builder for constructing a `Graph`.
///
/// Edge requests are recorded and applied on `build` with the usual
/// `add_edge` rules, so self loops and out-of-range pairs are dropped.
pub struct GraphBuilder {
    num_nodes: usize,
    directed: bool,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Start an undirected graph with `num_nodes` nodes.
    pub fn undirected(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            directed: false,
            edges: Vec::new(),
        }
    }

    /// Start a directed graph with `num_nodes` nodes.
    pub fn directed(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            directed: true,
            edges: Vec::new(),
        }
    }

    /// Request an edge between `u` and `v`.
    pub fn edge(mut self, u: usize, v: usize) -> Self {
        self.edges.push(Edge::new(u, v));
        self
    }

    /// Request several edges.
    pub fn edges<I, E>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        self.edges.extend(edges.into_iter().map(Into::into));
        self
    }

    /// Allocate the graph and insert every requested edge.
    pub fn build(self) -> GraphResult<Graph> {
        let mut graph = Graph::new(self.num_nodes, self.directed)?;
        for edge in &self.edges {
            graph.add_edge(edge.source, edge.target);
        }
        Ok(graph)
    }
}
