//! Text renderings of a graph: raw adjacency matrix, DOT, and a JSON snapshot.

pub mod dot;
pub mod json;
pub mod matrix;

pub use dot::{render_dot, write_dot};
pub use json::GraphSnapshot;
pub use matrix::{render_matrix, write_matrix};
