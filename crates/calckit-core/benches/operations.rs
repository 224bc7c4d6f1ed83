//! Criterion benchmarks for the calculators.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use calckit_core::arithmetic::{add, checked_add, subtract};
use calckit_core::geometry::{area_circle, area_rectangle, area_square};
use calckit_core::operation::{evaluate_all, Request};
use calckit_core::options::Options;

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("Geometry");
    group.bench_function("square", |b| b.iter(|| area_square(black_box(4.0))));
    group.bench_function("rectangle", |b| {
        b.iter(|| area_rectangle(black_box(5.0), black_box(3.0)));
    });
    group.bench_function("circle", |b| b.iter(|| area_circle(black_box(2.5))));
    group.finish();
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Arithmetic");
    group.bench_function("add", |b| b.iter(|| add(black_box(5), black_box(3))));
    group.bench_function("subtract", |b| {
        b.iter(|| subtract(black_box(5), black_box(3)));
    });
    group.bench_function("checked_add", |b| {
        b.iter(|| checked_add(black_box(5), black_box(3)));
    });
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let requests: Vec<Request> = (0..1_000)
        .map(|i| match i % 5 {
            0 => Request::Square { side: f64::from(i) },
            1 => Request::Rectangle {
                base: f64::from(i),
                height: 2.0,
            },
            2 => Request::Circle { radius: f64::from(i) },
            3 => Request::Add { a: i, b: 7 },
            _ => Request::Subtract { a: i, b: 7 },
        })
        .collect();

    let mut group = c.benchmark_group("Batch");
    for (label, opts) in [("permissive", Options::default()), ("strict", Options::strict())] {
        group.bench_function(label, |b| {
            b.iter(|| evaluate_all(black_box(&requests), &opts));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_geometry, bench_arithmetic, bench_batch);
criterion_main!(benches);
