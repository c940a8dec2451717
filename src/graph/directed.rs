//! Directed simple graph over square storage.

use crate::types::{Edge, GraphResult};

use super::{AdjacencyMatrix, SimpleGraph};

/// A directed simple graph. The arc `u -> v` lives in cell `(u, v)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph {
    matrix: AdjacencyMatrix,
}

impl Digraph {
    /// Create a directed graph with `num_nodes` nodes and no arcs.
    pub fn new(num_nodes: usize) -> GraphResult<Self> {
        let matrix = AdjacencyMatrix::square(num_nodes)?;
        log::debug!("Created directed graph with {} nodes", num_nodes);
        Ok(Self { matrix })
    }

    /// The underlying square storage.
    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    /// Number of arcs leaving `u`; zero for a node not in the graph.
    pub fn out_degree(&self, u: usize) -> usize {
        (0..self.node_count()).filter(|&v| self.has_edge(u, v)).count()
    }

    /// Number of arcs entering `v`; zero for a node not in the graph.
    pub fn in_degree(&self, v: usize) -> usize {
        (0..self.node_count()).filter(|&u| self.has_edge(u, v)).count()
    }

    fn in_range(&self, u: usize, v: usize) -> bool {
        self.has_node(u) && self.has_node(v)
    }
}

impl SimpleGraph for Digraph {
    fn node_count(&self) -> usize {
        self.matrix.num_nodes()
    }

    fn is_directed(&self) -> bool {
        true
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.in_range(u, v) && self.matrix.get(u, v)
    }

    fn add_edge(&mut self, u: usize, v: usize) -> bool {
        if !self.in_range(u, v) || u == v {
            log::trace!("Ignoring arc request ({}, {})", u, v);
            return false;
        }
        !self.matrix.set(u, v, true)
    }

    fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        if !self.in_range(u, v) {
            log::trace!("Ignoring arc removal ({}, {})", u, v);
            return false;
        }
        self.matrix.set(u, v, false)
    }

    fn edge_count(&self) -> usize {
        self.matrix.count()
    }

    fn edges(&self) -> Vec<Edge> {
        self.matrix
            .present_cells()
            .map(|(u, v)| Edge::new(u, v))
            .collect()
    }
}
