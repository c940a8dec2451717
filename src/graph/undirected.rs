//! Undirected simple graph over lower-triangular storage.

use crate::types::{Edge, GraphResult};

use super::{AdjacencyMatrix, SimpleGraph};

/// An undirected simple graph.
///
/// The edge `{u, v}` lives in the canonical cell `(max(u, v), min(u, v))`;
/// the diagonal and upper half are never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UGraph {
    matrix: AdjacencyMatrix,
}

impl UGraph {
    /// Create an undirected graph with `num_nodes` nodes and no edges.
    pub fn new(num_nodes: usize) -> GraphResult<Self> {
        let matrix = AdjacencyMatrix::lower_triangular(num_nodes)?;
        log::debug!("Created undirected graph with {} nodes", num_nodes);
        Ok(Self { matrix })
    }

    /// The underlying triangular storage.
    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    fn canonical(u: usize, v: usize) -> (usize, usize) {
        (u.max(v), u.min(v))
    }

    fn in_range(&self, u: usize, v: usize) -> bool {
        self.has_node(u) && self.has_node(v)
    }
}

impl SimpleGraph for UGraph {
    fn node_count(&self) -> usize {
        self.matrix.num_nodes()
    }

    fn is_directed(&self) -> bool {
        false
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        if !self.in_range(u, v) {
            return false;
        }
        let (row, col) = Self::canonical(u, v);
        self.matrix.get(row, col)
    }

    fn add_edge(&mut self, u: usize, v: usize) -> bool {
        if !self.in_range(u, v) || u == v {
            log::trace!("Ignoring undirected edge request {{{}, {}}}", u, v);
            return false;
        }
        let (row, col) = Self::canonical(u, v);
        !self.matrix.set(row, col, true)
    }

    fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        if !self.in_range(u, v) {
            log::trace!("Ignoring undirected edge removal {{{}, {}}}", u, v);
            return false;
        }
        let (row, col) = Self::canonical(u, v);
        self.matrix.set(row, col, false)
    }

    fn edge_count(&self) -> usize {
        self.matrix.count()
    }

    /// Row-major over the triangular half: larger endpoint, then smaller.
    fn edges(&self) -> Vec<Edge> {
        self.matrix
            .present_cells()
            .map(|(row, col)| Edge::unordered(row, col))
            .collect()
    }
}
