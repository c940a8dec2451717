//! Criterion benchmarks for adj-matrix.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use adj_matrix::format::{render_dot, render_matrix};
use adj_matrix::graph::{Graph, SimpleGraph};

/// Build a graph with roughly `edges_per_node` random edges per node.
fn make_graph(node_count: usize, edges_per_node: usize, directed: bool) -> Graph {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::new(node_count, directed).unwrap();
    for u in 0..node_count {
        for _ in 0..edges_per_node {
            let v = rng.gen_range(0..node_count);
            graph.add_edge(u, v);
        }
    }
    graph
}

fn bench_create(c: &mut Criterion) {
    c.bench_function("create_undirected_1k", |b| {
        b.iter(|| Graph::undirected(1_000).unwrap())
    });
    c.bench_function("create_directed_1k", |b| {
        b.iter(|| Graph::directed(1_000).unwrap())
    });
}

fn bench_add_edge(c: &mut Criterion) {
    let mut graph = make_graph(1_000, 3, false);

    c.bench_function("add_edge_undirected_1k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let u = rng.gen_range(0..1_000);
            let v = rng.gen_range(0..1_000);
            graph.add_edge(u, v)
        })
    });
}

fn bench_has_edge(c: &mut Criterion) {
    let graph = make_graph(1_000, 3, true);

    c.bench_function("has_edge_directed_1k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let u = rng.gen_range(0..1_000);
            let v = rng.gen_range(0..1_000);
            graph.has_edge(u, v)
        })
    });
}

fn bench_edge_count(c: &mut Criterion) {
    let undirected = make_graph(1_000, 3, false);
    let directed = make_graph(1_000, 3, true);

    c.bench_function("edge_count_undirected_1k", |b| {
        b.iter(|| undirected.edge_count())
    });
    c.bench_function("edge_count_directed_1k", |b| b.iter(|| directed.edge_count()));
}

fn bench_render(c: &mut Criterion) {
    let graph = make_graph(200, 5, false);

    c.bench_function("render_matrix_200", |b| b.iter(|| render_matrix(&graph)));
    c.bench_function("render_dot_200", |b| b.iter(|| render_dot(&graph)));
}

criterion_group!(
    benches,
    bench_create,
    bench_add_edge,
    bench_has_edge,
    bench_edge_count,
    bench_render,
);
criterion_main!(benches);
