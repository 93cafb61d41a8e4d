//! Criterion benchmarks comparing the five leaf variants.
//!
//! Two groups: raw insert bursts into a fresh leaf, and the full mixed
//! driver protocol at several write ratios. The synthetic cost counters
//! are exercised but not reported here; criterion measures wall-clock
//! only.
//!
//! ```bash
//! cargo bench --bench leaf_strategies
//! cargo bench --bench leaf_strategies -- "insert_burst"
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use nvleaf::{
    BenchConfig, BenchmarkDriver, CostMeter, CostModel, LeafStrategy, StrategyKind,
    WorkloadGenerator,
};

/// Fixed seed so every variant faces the same key stream.
const BENCH_SEED: u64 = 0xC0FFEE;

fn generate_keys(n: usize) -> Vec<u64> {
    let mut workload = WorkloadGenerator::new(BENCH_SEED, 1_000_000_000, 1.0);
    (0..n).map(|_| workload.next_key()).collect()
}

fn bench_insert_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_burst");

    for capacity in [32usize, 128] {
        let keys = generate_keys(capacity);

        for kind in StrategyKind::ALL {
            group.bench_with_input(
                BenchmarkId::new(kind.label(), capacity),
                &capacity,
                |b, &capacity| {
                    b.iter(|| {
                        let mut leaf = kind.build(capacity, CostModel::Positional);
                        let mut meter = CostMeter::new();
                        for &key in &keys {
                            leaf.insert(key, &mut meter);
                        }
                        black_box(meter.snapshot())
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_mixed_workload(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_workload");

    for write_ratio in [0.9, 0.5, 0.1] {
        let config = BenchConfig {
            prefill_count: 96,
            ops_count: 10_000,
            write_ratio,
            seed: BENCH_SEED,
            key_max: 1_000_000_000,
            leaf_capacity: 128,
        };
        let driver = BenchmarkDriver::new(config).expect("bench config is valid");

        for kind in StrategyKind::ALL {
            group.bench_with_input(
                BenchmarkId::new(kind.label(), write_ratio),
                &write_ratio,
                |b, _| {
                    b.iter(|| {
                        let mut leaf = kind.build(config.leaf_capacity, CostModel::Positional);
                        black_box(driver.run(leaf.as_mut()).expect("run succeeds"))
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_insert_burst, bench_mixed_workload);
criterion_main!(benches);
