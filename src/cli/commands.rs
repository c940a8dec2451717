//! CLI command implementations.

use crate::format::{render_dot, render_matrix, GraphSnapshot};
use crate::graph::{Graph, GraphBuilder, SimpleGraph};
use crate::types::{Edge, GraphResult};

/// Parse a node pair written as `U-V`, `U,V` or `U:V`.
pub fn parse_edge_pair(text: &str) -> Option<Edge> {
    let (u, v) = text.trim().split_once(['-', ',', ':'])?;
    let u = u.trim().parse().ok()?;
    let v = v.trim().parse().ok()?;
    Some(Edge::new(u, v))
}

/// Build a graph from the CLI's node count and edge lists.
///
/// All additions are applied before any removal.
pub fn build_graph(
    nodes: usize,
    directed: bool,
    add: &[Edge],
    remove: &[Edge],
) -> GraphResult<Graph> {
    let builder = if directed {
        GraphBuilder::directed(nodes)
    } else {
        GraphBuilder::undirected(nodes)
    };
    let mut graph = builder.edges(add.iter().copied()).build()?;
    for edge in remove {
        graph.remove_edge(edge.source, edge.target);
    }
    log::debug!(
        "Built graph: {} nodes, {} edges (directed: {})",
        graph.node_count(),
        graph.edge_count(),
        directed
    );
    Ok(graph)
}

/// Print the adjacency matrix.
pub fn cmd_matrix(graph: &Graph, json: bool) -> GraphResult<()> {
    if json {
        let n = graph.node_count();
        let rows: Vec<Vec<u8>> = (0..n)
            .map(|u| (0..n).map(|v| graph.has_edge(u, v) as u8).collect())
            .collect();
        println!("{}", serde_json::json!({ "matrix": rows }));
    } else {
        print!("{}", render_matrix(graph));
    }
    Ok(())
}

/// Print the DOT description.
pub fn cmd_dot(graph: &Graph, json: bool) -> GraphResult<()> {
    if json {
        println!("{}", serde_json::json!({ "dot": render_dot(graph) }));
    } else {
        print!("{}", render_dot(graph));
    }
    Ok(())
}

/// Print node/edge statistics.
pub fn cmd_stats(graph: &Graph, json: bool) -> GraphResult<()> {
    let snapshot = GraphSnapshot::capture(graph);
    if json {
        println!("{}", snapshot.to_json_pretty());
    } else {
        println!("Nodes: {}", snapshot.num_nodes);
        println!(
            "Kind: {}",
            if snapshot.directed {
                "directed"
            } else {
                "undirected"
            }
        );
        println!("Edges: {}", snapshot.edge_count);
        if let Some(dg) = graph.as_directed() {
            println!("Degrees (out/in):");
            for u in 0..dg.node_count() {
                println!("  {}: {}/{}", u, dg.out_degree(u), dg.in_degree(u));
            }
        }
    }
    Ok(())
}
