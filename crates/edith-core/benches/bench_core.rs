// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// BENCHMARK SUITE — edith-core
//
// Measures the unlock/supply calculations over the reference configuration.
// Run: cargo bench -p edith-core
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use edith_core::{supply_shocks, TokenomicsConfig, TokenomicsEngine};

fn reference_engine() -> TokenomicsEngine {
    TokenomicsEngine::new(TokenomicsConfig::reference()).unwrap()
}

// ─────────────────────────────────────────────────────────────────
// PER-MONTH CALCULATORS
// ─────────────────────────────────────────────────────────────────

fn bench_total_unlock(c: &mut Criterion) {
    let engine = reference_engine();
    c.bench_function("unlock/total_month_13", |b| {
        b.iter(|| black_box(engine.total_unlock(black_box(13))))
    });
}

fn bench_category_unlock(c: &mut Criterion) {
    let engine = reference_engine();
    c.bench_function("unlock/private_sale_month_5", |b| {
        b.iter(|| black_box(engine.unlock("Private Sale", black_box(5)).unwrap()))
    });
}

// ─────────────────────────────────────────────────────────────────
// SERIES BENCHMARKS (scaling with horizon)
// ─────────────────────────────────────────────────────────────────

fn bench_supply_series(c: &mut Criterion) {
    let engine = reference_engine();
    let mut group = c.benchmark_group("supply/series");
    for horizon in [12u32, 48, 240] {
        group.bench_with_input(BenchmarkId::from_parameter(horizon), &horizon, |b, &h| {
            b.iter(|| black_box(engine.supply_series(h).unwrap()))
        });
    }
    group.finish();
}

fn bench_supply_shocks(c: &mut Criterion) {
    let engine = reference_engine();
    let series = engine.supply_series(240).unwrap();
    c.bench_function("supply/shocks_240", |b| {
        b.iter(|| black_box(supply_shocks(black_box(&series))))
    });
}

fn bench_engine_construction(c: &mut Criterion) {
    c.bench_function("config/validate_reference", |b| {
        b.iter(|| black_box(TokenomicsEngine::new(TokenomicsConfig::reference()).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_total_unlock,
    bench_category_unlock,
    bench_supply_series,
    bench_supply_shocks,
    bench_engine_construction,
);
criterion_main!(benches);
