//! The edge pair reported by edge enumeration.

use serde::Serialize;

/// A present edge between two nodes.
///
/// For directed graphs this is the arc `source -> target`. For undirected
/// graphs the pair is unordered and always reported with `source < target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge {
    /// Initial node (smaller endpoint for undirected edges).
    pub source: usize,
    /// Terminal node (larger endpoint for undirected edges).
    pub target: usize,
}

impl Edge {
    /// Create an edge from `source` to `target`.
    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }

    /// Create an undirected edge, normalising the endpoints so `source < target`.
    pub fn unordered(u: usize, v: usize) -> Self {
        Self {
            source: u.min(v),
            target: u.max(v),
        }
    }

    /// Whether both endpoints are the same node.
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

impl From<(usize, usize)> for Edge {
    fn from((source, target): (usize, usize)) -> Self {
        Self::new(source, target)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.source, self.target)
    }
}
