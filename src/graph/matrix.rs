//! Row-per-node boolean adjacency storage.

use crate::types::{GraphError, GraphResult};

/// Owned adjacency storage: one row per node, each row sized by the graph kind.
///
/// Triangular storage keeps only the cells strictly below the diagonal (row
/// `i` holds columns `0..i`). Square storage keeps the full `n x n` matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    num_nodes: usize,
    rows: Vec<Vec<bool>>,
}

impl AdjacencyMatrix {
    /// Allocate strictly-lower-triangular storage for `num_nodes` nodes.
    pub fn lower_triangular(num_nodes: usize) -> GraphResult<Self> {
        Self::allocate(num_nodes, |row| row)
    }

    /// Allocate full square storage for `num_nodes` nodes.
    pub fn square(num_nodes: usize) -> GraphResult<Self> {
        Self::allocate(num_nodes, |_| num_nodes)
    }

    fn allocate(num_nodes: usize, row_len: impl Fn(usize) -> usize) -> GraphResult<Self> {
        if num_nodes == 0 {
            log::error!("Cannot create an empty graph. Graph must have at least one node");
            return Err(GraphError::EmptyGraph);
        }

        let mut rows: Vec<Vec<bool>> = Vec::new();
        rows.try_reserve_exact(num_nodes).map_err(|source| {
            log::error!("Could not allocate {} adjacency rows", num_nodes);
            GraphError::Allocation {
                nodes: num_nodes,
                source,
            }
        })?;

        for i in 0..num_nodes {
            let len = row_len(i);
            let mut row: Vec<bool> = Vec::new();
            // Rows allocated so far are dropped with `rows` on the error path.
            row.try_reserve_exact(len).map_err(|source| {
                log::error!("Could not allocate adjacency row {} ({} cells)", i, len);
                GraphError::Allocation {
                    nodes: num_nodes,
                    source,
                }
            })?;
            row.resize(len, false);
            rows.push(row);
        }

        Ok(Self { num_nodes, rows })
    }

    /// Number of nodes (rows).
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Read a cell. Cells outside the materialised shape read as absent.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Write a cell, returning the previous value.
    ///
    /// Writes outside the materialised shape are ignored and report `false`.
    pub fn set(&mut self, row: usize, col: usize, present: bool) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => std::mem::replace(cell, present),
            None => false,
        }
    }

    /// Number of present cells.
    pub fn count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.iter().filter(|&&c| c).count())
            .sum()
    }

    /// Iterate over `(row, col)` of every present cell, rows then columns.
    pub fn present_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &c)| c)
                .map(move |(j, _)| (i, j))
        })
    }

    /// Total number of materialised cells.
    pub fn capacity(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}
