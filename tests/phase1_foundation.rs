//! Phase 1 tests: construction, storage shape, common operations.

use adj_matrix::graph::{AdjacencyMatrix, Digraph, Graph, GraphBuilder, SimpleGraph, UGraph};
use adj_matrix::types::edge::Edge;
use adj_matrix::types::error::GraphError;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ==================== Construction Tests ====================

#[test]
fn test_create_undirected() {
    init_logger();
    let graph = Graph::new(5, false).unwrap();
    assert_eq!(graph.node_count(), 5);
    assert!(!graph.is_directed());
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.as_undirected().is_some());
    assert!(graph.as_directed().is_none());
}

#[test]
fn test_create_directed() {
    init_logger();
    let graph = Graph::new(5, true).unwrap();
    assert_eq!(graph.node_count(), 5);
    assert!(graph.is_directed());
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.as_directed().is_some());
    assert!(graph.as_undirected().is_none());
}

#[test]
fn test_create_zero_nodes_rejected() {
    init_logger();
    for directed in [false, true] {
        match Graph::new(0, directed) {
            Err(GraphError::EmptyGraph) => {}
            other => panic!("Expected EmptyGraph error, got {:?}", other),
        }
    }
    assert!(matches!(UGraph::new(0), Err(GraphError::EmptyGraph)));
    assert!(matches!(Digraph::new(0), Err(GraphError::EmptyGraph)));
}

#[test]
fn test_create_unallocatable_reports_error() {
    init_logger();
    match Graph::directed(usize::MAX) {
        Err(GraphError::Allocation { nodes, .. }) => assert_eq!(nodes, usize::MAX),
        other => panic!("Expected Allocation error, got {:?}", other),
    }
    assert!(matches!(
        Graph::undirected(usize::MAX),
        Err(GraphError::Allocation { .. })
    ));
}

#[test]
fn test_single_node_graph() {
    let mut graph = Graph::undirected(1).unwrap();
    assert_eq!(graph.node_count(), 1);
    assert!(graph.has_node(0));
    assert!(!graph.add_edge(0, 0));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_error_messages() {
    let err = Graph::new(0, false).unwrap_err();
    assert!(err.to_string().contains("at least one node"));

    let err = Graph::new(usize::MAX, true).unwrap_err();
    assert!(err.to_string().contains("Could not allocate"));
}

// ==================== Storage Tests ====================

#[test]
fn test_triangular_storage_shape() {
    let matrix = AdjacencyMatrix::lower_triangular(5).unwrap();
    assert_eq!(matrix.num_nodes(), 5);
    // Strictly below the diagonal: 0 + 1 + 2 + 3 + 4
    assert_eq!(matrix.capacity(), 10);
    assert_eq!(matrix.count(), 0);
}

#[test]
fn test_square_storage_shape() {
    let matrix = AdjacencyMatrix::square(5).unwrap();
    assert_eq!(matrix.num_nodes(), 5);
    assert_eq!(matrix.capacity(), 25);
    assert_eq!(matrix.count(), 0);
}

#[test]
fn test_storage_outside_shape() {
    let mut matrix = AdjacencyMatrix::lower_triangular(3).unwrap();
    // Upper half and diagonal are not materialised.
    assert!(!matrix.set(0, 1, true));
    assert!(!matrix.set(1, 1, true));
    assert!(!matrix.get(0, 1));
    assert!(!matrix.get(1, 1));
    assert_eq!(matrix.count(), 0);

    assert!(!matrix.set(2, 0, true));
    assert!(matrix.get(2, 0));
    assert!(matrix.set(2, 0, false));
    assert!(!matrix.get(2, 0));
}

#[test]
fn test_present_cells_order() {
    let mut matrix = AdjacencyMatrix::square(3).unwrap();
    matrix.set(2, 0, true);
    matrix.set(0, 2, true);
    matrix.set(0, 1, true);
    let cells: Vec<(usize, usize)> = matrix.present_cells().collect();
    assert_eq!(cells, vec![(0, 1), (0, 2), (2, 0)]);
}

#[test]
fn test_undirected_uses_triangular_storage() {
    let graph = UGraph::new(4).unwrap();
    assert_eq!(graph.matrix().capacity(), 6);
    let graph = Digraph::new(4).unwrap();
    assert_eq!(graph.matrix().capacity(), 16);
}

// ==================== Common Operation Tests ====================

#[test]
fn test_has_node() {
    let graph = Graph::directed(3).unwrap();
    assert!(graph.has_node(0));
    assert!(graph.has_node(2));
    assert!(!graph.has_node(3));
    assert!(!graph.has_node(usize::MAX));
}

#[test]
fn test_node_count_is_fixed() {
    let mut graph = Graph::undirected(4).unwrap();
    graph.add_edge(0, 1);
    graph.add_edge(2, 3);
    graph.remove_edge(0, 1);
    graph.add_edge(0, 9);
    assert_eq!(graph.node_count(), 4);
}

#[test]
fn test_graph_from_operation_sets() {
    let graph: Graph = UGraph::new(2).unwrap().into();
    assert!(!graph.is_directed());
    let graph: Graph = Digraph::new(2).unwrap().into();
    assert!(graph.is_directed());
}

#[test]
fn test_clone_is_independent() {
    let mut original = Graph::undirected(3).unwrap();
    original.add_edge(0, 1);
    let mut copy = original.clone();
    copy.add_edge(1, 2);
    assert_eq!(original.edge_count(), 1);
    assert_eq!(copy.edge_count(), 2);
    assert_ne!(original, copy);
}

// ==================== Edge Type Tests ====================

#[test]
fn test_edge_creation() {
    let edge = Edge::new(3, 1);
    assert_eq!(edge.source, 3);
    assert_eq!(edge.target, 1);
    assert!(!edge.is_loop());
    assert_eq!(Edge::from((3, 1)), edge);
    assert_eq!(edge.to_string(), "(3, 1)");
}

#[test]
fn test_edge_unordered_normalises() {
    assert_eq!(Edge::unordered(3, 1), Edge::new(1, 3));
    assert_eq!(Edge::unordered(1, 3), Edge::new(1, 3));
    assert!(Edge::unordered(2, 2).is_loop());
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_directed() {
    let graph = GraphBuilder::directed(3)
        .edge(0, 1)
        .edge(0, 2)
        .edge(1, 2)
        .build()
        .unwrap();
    assert!(graph.is_directed());
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.has_edge(0, 2));
    assert!(!graph.has_edge(2, 0));
}

#[test]
fn test_builder_drops_invalid_requests() {
    let graph = GraphBuilder::undirected(3)
        .edges([
            Edge::new(0, 1),
            Edge::new(1, 0),
            Edge::new(2, 2),
            Edge::new(0, 7),
        ])
        .build()
        .unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.has_edge(1, 0));
}

#[test]
fn test_builder_zero_nodes() {
    let result = GraphBuilder::undirected(0).edge(0, 1).build();
    assert!(matches!(result, Err(GraphError::EmptyGraph)));
}
