//! DOT language rendering, usable by Graphviz tools.

use std::io::Write;

use crate::graph::SimpleGraph;
use crate::types::{GraphResult, DOT_DIGRAPH, DOT_DIRECTED_OP, DOT_GRAPH, DOT_UNDIRECTED_OP};

/// Write `graph` as a DOT block, one edge statement per line.
///
/// Undirected edges print as `v -- u;` with `v < u`, directed arcs as
/// `u -> v;`, in storage scan order.
pub fn write_dot<G: SimpleGraph + ?Sized>(
    graph: &G,
    writer: &mut impl Write,
) -> GraphResult<()> {
    let (keyword, op) = if graph.is_directed() {
        (DOT_DIGRAPH, DOT_DIRECTED_OP)
    } else {
        (DOT_GRAPH, DOT_UNDIRECTED_OP)
    };

    writeln!(writer, "{} {{", keyword)?;
    for edge in graph.edges() {
        writeln!(writer, "{} {} {};", edge.source, op, edge.target)?;
    }
    writeln!(writer, "}}")?;
    Ok(())
}

/// Render `graph` as a DOT string.
pub fn render_dot<G: SimpleGraph + ?Sized>(graph: &G) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_dot(graph, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
