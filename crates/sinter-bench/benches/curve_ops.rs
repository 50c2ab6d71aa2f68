//! Criterion micro-benchmarks for curve evaluation and database
//! construction.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sinter_bench::reference_sources;
use sinter_block::Host;
use sinter_core::{MaterialState, StateProperty};
use sinter_props::{polynomial_value, table_value, CurveFormat, PropertyDatabase};

/// Benchmark: evaluate one table curve at 1000 temperatures.
fn bench_table_eval(c: &mut Criterion) {
    let db = PropertyDatabase::<Host>::from_sources(CurveFormat::Table, &reference_sources())
        .unwrap();
    let tables = db.tables_view();
    let s = MaterialState::Solid.index();
    let p = StateProperty::SpecificHeat.index();
    c.bench_function("table_eval_1000", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..1000 {
                let t = 300.0 + i as f64 * 1.9;
                acc += table_value(black_box(tables), 0, s, p, t);
            }
            black_box(acc)
        });
    });
}

/// Benchmark: evaluate one polynomial curve at 1000 temperatures.
fn bench_polynomial_eval(c: &mut Criterion) {
    let source = sinter_props::MaterialSource::new(sinter_core::MaterialId(0)).curve(
        MaterialState::Solid,
        StateProperty::SpecificHeat,
        "420,0.21,-3.1e-5,1.2e-8",
    );
    let db =
        PropertyDatabase::<Host>::from_sources(CurveFormat::Polynomial, &[source]).unwrap();
    let polynomials = db.polynomials_view();
    let s = MaterialState::Solid.index();
    let p = StateProperty::SpecificHeat.index();
    c.bench_function("polynomial_eval_1000", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..1000 {
                let t = 300.0 + i as f64 * 1.9;
                acc += polynomial_value(black_box(polynomials), 0, s, p, t);
            }
            black_box(acc)
        });
    });
}

/// Benchmark: parse and pack the full reference database.
fn bench_database_build(c: &mut Criterion) {
    let sources = reference_sources();
    c.bench_function("database_build", |b| {
        b.iter(|| {
            PropertyDatabase::<Host>::from_sources(CurveFormat::Table, black_box(&sources))
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_table_eval,
    bench_polynomial_eval,
    bench_database_build
);
criterion_main!(benches);
