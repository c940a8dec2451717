//! A graph whose directedness is chosen at construction time.

use crate::format::{self, GraphSnapshot};
use crate::types::{Edge, GraphResult};

use super::{Digraph, SimpleGraph, UGraph};

/// A simple graph that is either undirected or directed.
///
/// Common operations work on both variants; edge operations dispatch to the
/// operation set of the variant chosen by `is_directed` at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Graph {
    /// Undirected graph with triangular storage.
    Undirected(UGraph),
    /// Directed graph with square storage.
    Directed(Digraph),
}

impl Graph {
    /// Create a graph with `num_nodes` nodes and no edges.
    ///
    /// Fails with `GraphError::EmptyGraph` for zero nodes and with
    /// `GraphError::Allocation` if storage cannot be reserved.
    pub fn new(num_nodes: usize, is_directed: bool) -> GraphResult<Self> {
        if is_directed {
            Self::directed(num_nodes)
        } else {
            Self::undirected(num_nodes)
        }
    }

    /// Create an undirected graph.
    pub fn undirected(num_nodes: usize) -> GraphResult<Self> {
        UGraph::new(num_nodes).map(Self::Undirected)
    }

    /// Create a directed graph.
    pub fn directed(num_nodes: usize) -> GraphResult<Self> {
        Digraph::new(num_nodes).map(Self::Directed)
    }

    /// The undirected operation set, if this graph is undirected.
    pub fn as_undirected(&self) -> Option<&UGraph> {
        match self {
            Self::Undirected(g) => Some(g),
            Self::Directed(_) => None,
        }
    }

    /// Mutable undirected operation set, if this graph is undirected.
    pub fn as_undirected_mut(&mut self) -> Option<&mut UGraph> {
        match self {
            Self::Undirected(g) => Some(g),
            Self::Directed(_) => None,
        }
    }

    /// The directed operation set, if this graph is directed.
    pub fn as_directed(&self) -> Option<&Digraph> {
        match self {
            Self::Directed(g) => Some(g),
            Self::Undirected(_) => None,
        }
    }

    /// Mutable directed operation set, if this graph is directed.
    pub fn as_directed_mut(&mut self) -> Option<&mut Digraph> {
        match self {
            Self::Directed(g) => Some(g),
            Self::Undirected(_) => None,
        }
    }

    /// The adjacency matrix as text, one row per line.
    pub fn render_matrix(&self) -> String {
        format::render_matrix(self)
    }

    /// The DOT description of this graph.
    pub fn render_dot(&self) -> String {
        format::render_dot(self)
    }

    /// A serializable snapshot of this graph.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot::capture(self)
    }

    fn inner(&self) -> &dyn SimpleGraph {
        match self {
            Self::Undirected(g) => g,
            Self::Directed(g) => g,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn SimpleGraph {
        match self {
            Self::Undirected(g) => g,
            Self::Directed(g) => g,
        }
    }
}

impl SimpleGraph for Graph {
    fn node_count(&self) -> usize {
        self.inner().node_count()
    }

    fn is_directed(&self) -> bool {
        matches!(self, Self::Directed(_))
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.inner().has_edge(u, v)
    }

    fn add_edge(&mut self, u: usize, v: usize) -> bool {
        self.inner_mut().add_edge(u, v)
    }

    fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        self.inner_mut().remove_edge(u, v)
    }

    fn edge_count(&self) -> usize {
        self.inner().edge_count()
    }

    fn edges(&self) -> Vec<Edge> {
        self.inner().edges()
    }
}

impl From<UGraph> for Graph {
    fn from(g: UGraph) -> Self {
        Self::Undirected(g)
    }
}

impl From<Digraph> for Graph {
    fn from(g: Digraph) -> Self {
        Self::Directed(g)
    }
}
