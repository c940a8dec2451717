//! JSON snapshot of a graph for machine-readable CLI output.

use serde::Serialize;

use crate::graph::SimpleGraph;
use crate::types::Edge;

/// Serializable view of a graph's node count, kind and edge list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSnapshot {
    pub num_nodes: usize,
    pub directed: bool,
    pub edge_count: usize,
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    /// Capture the current state of `graph`.
    pub fn capture<G: SimpleGraph + ?Sized>(graph: &G) -> Self {
        let edges = graph.edges();
        Self {
            num_nodes: graph.node_count(),
            directed: graph.is_directed(),
            edge_count: edges.len(),
            edges,
        }
    }

    /// Compact JSON encoding.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Indented JSON encoding.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
