//! Criterion benchmarks for whole-farm activation passes.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use flexwater_bench::{reference_farm, stress_farm};
use flexwater_core::BalanceMode;

fn bench_activate_reference(c: &mut Criterion) {
    let mut farm = reference_farm(42, BalanceMode::Exact).unwrap();
    c.bench_function("activate_all_reference", |b| {
        b.iter(|| {
            let activation = farm.activate_all();
            farm.new_day();
            black_box(activation);
        });
    });
}

fn bench_activate_stress(c: &mut Criterion) {
    let mut farm = stress_farm(42, BalanceMode::Relaxed).unwrap();
    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("activate_all_stress", |b| {
        b.iter(|| {
            let activation = farm.activate_all();
            farm.new_day();
            black_box(activation);
        });
    });
    group.finish();
}

fn bench_range_query(c: &mut Criterion) {
    let farm = reference_farm(7, BalanceMode::Exact).unwrap();
    c.bench_function("all_tiles_in_range_reference", |b| {
        b.iter(|| black_box(farm.all_tiles_in_range_of_sprinklers().len()));
    });
}

criterion_group!(
    benches,
    bench_activate_reference,
    bench_activate_stress,
    bench_range_query
);
criterion_main!(benches);
