//! Criterion benchmarks for the nodal-to-unit temperature projection.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use sinter_block::Backend;
use sinter_state::UnitSupport;

/// A 10K-unit support with 8 quadrature nodes per unit over a shared
/// 20K-node field.
fn make_support(n_units: usize) -> (UnitSupport, Vec<f64>) {
    let nodes_per_unit = 8;
    let n_nodes = n_units * 2;
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    let offsets: Vec<usize> = (0..=n_units).map(|i| i * nodes_per_unit).collect();
    let nodes: Vec<usize> = (0..n_units * nodes_per_unit)
        .map(|_| rng.random_range(0..n_nodes))
        .collect();
    let weights: Vec<f64> = (0..n_units * nodes_per_unit)
        .map(|_| rng.random_range(0.1..1.0))
        .collect();
    let nodal: Vec<f64> = (0..n_nodes).map(|_| rng.random_range(300.0..2200.0)).collect();

    (
        UnitSupport::new(offsets, nodes, weights, vec![true; n_units]),
        nodal,
    )
}

fn bench_project_10k_sequential(c: &mut Criterion) {
    let (support, nodal) = make_support(10_000);
    c.bench_function("project_10k_sequential", |b| {
        b.iter(|| support.project(black_box(&nodal), Backend::Sequential));
    });
}

fn bench_project_10k_threaded(c: &mut Criterion) {
    let (support, nodal) = make_support(10_000);
    c.bench_function("project_10k_threaded_4", |b| {
        b.iter(|| support.project(black_box(&nodal), Backend::Threaded { threads: 4 }));
    });
}

criterion_group!(benches, bench_project_10k_sequential, bench_project_10k_threaded);
criterion_main!(benches);
