//! Criterion benchmarks for the optimization pipeline.
//!
//! Drives the full enumerate → score → filter → rank pipeline over
//! subsets of the stock catalog to measure per-build evaluation
//! overhead at different inventory sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gearopt::catalog::{PartCatalog, Slot};
use gearopt::constraint::Constraint;
use gearopt::pipeline::{Optimizer, OptimizerConfig};
use gearopt::scoring::{PriorityLevel, PriorityWeights};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// First `counts[i]` parts of each slot pool, in stock order.
fn stock_subset(counts: [usize; 5]) -> PartCatalog {
    let stock = PartCatalog::stock();
    let mut parts = Vec::new();
    for (slot, &count) in Slot::ALL.iter().zip(counts.iter()) {
        parts.extend(stock.parts(*slot).iter().take(count).cloned());
    }
    PartCatalog::new(parts).expect("subset keeps every slot populated")
}

/// A random ~60% inventory, like a mid-game player's collection.
fn random_inventory(seed: u64) -> PartCatalog {
    let stock = PartCatalog::stock();
    let mut rng = StdRng::seed_from_u64(seed);
    loop {
        if let Ok(catalog) = stock.filter(|_| rng.random_bool(0.6)) {
            return catalog;
        }
    }
}

fn bench_stock_subsets(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize_stock_subset");
    group.sample_size(10);

    let weights = PriorityWeights::default()
        .with_race(PriorityLevel::High)
        .with_coin(PriorityLevel::Medium);

    for (label, counts) in [
        ("small", [4usize, 4, 4, 4, 6]),
        ("medium", [8, 6, 6, 8, 10]),
        ("large", [12, 10, 10, 12, 14]),
    ] {
        let catalog = stock_subset(counts);
        let optimizer = Optimizer::with_config(OptimizerConfig::default().with_top_n(20));
        group.bench_with_input(
            BenchmarkId::new(label, catalog.build_count()),
            &catalog,
            |b, catalog| {
                b.iter(|| {
                    let result = optimizer
                        .optimize(black_box(catalog), black_box(&weights), &Constraint::Simple)
                        .unwrap();
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_random_inventory(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize_random_inventory");
    group.sample_size(10);

    let weights = PriorityWeights::default().with_drift(PriorityLevel::High);

    for seed in [7u64, 42] {
        let catalog = random_inventory(seed);
        let optimizer = Optimizer::with_config(OptimizerConfig::default().with_top_n(20));
        group.bench_with_input(
            BenchmarkId::from_parameter(seed),
            &catalog,
            |b, catalog| {
                b.iter(|| {
                    let result = optimizer
                        .optimize(black_box(catalog), black_box(&weights), &Constraint::Simple)
                        .unwrap();
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_stock_subsets, bench_random_inventory);
criterion_main!(benches);
