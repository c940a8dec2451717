//! Raw adjacency matrix rendering.
//!
//! One line per node, each a space-separated row of `0`/`1` values. Undirected
//! graphs are reflected across the diagonal so the output is symmetric.

use std::io::Write;

use crate::graph::SimpleGraph;
use crate::types::{GraphResult, MATRIX_SEPARATOR};

/// Write the full `n x n` matrix of `graph` to `writer`.
pub fn write_matrix<G: SimpleGraph + ?Sized>(
    graph: &G,
    writer: &mut impl Write,
) -> GraphResult<()> {
    let n = graph.node_count();
    for u in 0..n {
        let row: Vec<&str> = (0..n)
            .map(|v| if graph.has_edge(u, v) { "1" } else { "0" })
            .collect();
        writeln!(writer, "{}", row.join(MATRIX_SEPARATOR))?;
    }
    Ok(())
}

/// Render the matrix of `graph` into a string.
pub fn render_matrix<G: SimpleGraph + ?Sized>(graph: &G) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_matrix(graph, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
