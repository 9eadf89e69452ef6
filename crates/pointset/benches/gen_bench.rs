//! Criterion microbenches for cluster growth, selection, and full generation.
//!
//! - growth: `build_grid` at the smallest and largest difficulty.
//! - select: candidate scans on a grown grid.
//! - generate: one full instance (growth, render, select, metadata).
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use pointset::api::{
    build_grid, render_grid, select_point, AnswerVerifier, ClusterGenerator, GrowthCfg, ReplayToken,
    SelectCfg,
};

fn bench_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("growth");
    let cfg = GrowthCfg::default();
    for difficulty in [1u32, 10] {
        group.bench_function(BenchmarkId::new("build_grid", difficulty), |b| {
            b.iter_batched(
                || ReplayToken { seed: 42, index: 0 }.to_std_rng(),
                |mut rng| build_grid(difficulty, &cfg, &mut rng),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_select_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");
    let mut rng = ReplayToken { seed: 7, index: 3 }.to_std_rng();
    let grid = build_grid(10, &GrowthCfg::default(), &mut rng);
    group.bench_function("select_point_d10", |b| {
        b.iter(|| select_point(&grid, &SelectCfg::default(), &mut rng))
    });
    group.bench_function("render_grid_d10", |b| b.iter(|| render_grid(&grid)));
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let mut gen = ClusterGenerator::from_seed(2025);
    for difficulty in [1u32, 5, 10] {
        group.bench_function(BenchmarkId::new("generate_one", difficulty), |b| {
            b.iter(|| gen.generate_one(difficulty))
        });
    }
    let verifier = AnswerVerifier::new();
    group.bench_function("verify_label", |b| {
        b.iter(|| verifier.verify_label("boundary", "Ответ: граничная точка"))
    });
    group.finish();
}

criterion_group!(benches, bench_growth, bench_select_and_render, bench_generate);
criterion_main!(benches);
