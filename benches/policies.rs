//! Benchmarks for the three replacement policies.
//!
//! Run with: `cargo bench --bench policies`

use std::time::Instant;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use framekit::engine::{FrameCache, ReplacementPolicy};
use framekit::page::PageId;

const POLICIES: [(&str, ReplacementPolicy); 3] = [
    ("lfu", ReplacementPolicy::Lfu),
    ("lru", ReplacementPolicy::Lru),
    ("clock", ReplacementPolicy::Clock),
];

fn warmed(policy: ReplacementPolicy, capacity: usize) -> FrameCache {
    let mut cache = FrameCache::new(policy, capacity).unwrap();
    for raw in 0..capacity as u64 {
        cache.load_page(PageId::new(raw));
    }
    cache
}

// ============================================================================
// Warmup insert (filling empty frames)
// ============================================================================

fn bench_warmup_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("warmup_insert");
    let capacity = 4096usize;
    group.throughput(Throughput::Elements(capacity as u64));

    for (name, policy) in POLICIES {
        group.bench_function(name, |b| {
            b.iter_batched(
                || FrameCache::new(policy, capacity).unwrap(),
                |mut cache| {
                    for raw in 0..capacity as u64 {
                        cache.load_page(std::hint::black_box(PageId::new(raw)));
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

// ============================================================================
// Eviction churn (every load is a full miss)
// ============================================================================

fn bench_eviction_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("eviction_churn");
    group.throughput(Throughput::Elements(4096));

    for (name, policy) in POLICIES {
        group.bench_function(name, |b| {
            b.iter_batched(
                || warmed(policy, 1024),
                |mut cache| {
                    for raw in 0..4096u64 {
                        cache.load_page(std::hint::black_box(PageId::new(10_000 + raw)));
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

// ============================================================================
// Hit path (pure touch performance on a full table)
// ============================================================================

fn bench_load_hit_ns(c: &mut Criterion) {
    for (name, policy) in POLICIES {
        c.bench_function(&format!("{name}_load_hit_ns"), |b| {
            b.iter_custom(|iters| {
                let capacity = 16_384u64;
                let mut cache = warmed(policy, capacity as usize);
                let start = Instant::now();
                for (idx, _) in (0..iters).enumerate() {
                    let page = PageId::new((idx as u64) % capacity);
                    let _ = std::hint::black_box(cache.load_page(std::hint::black_box(page)));
                }
                start.elapsed()
            })
        });
    }
}

// ============================================================================
// Hotset workload (90% of loads hit 10% of the page universe)
// ============================================================================

fn bench_hotset_workload(c: &mut Criterion) {
    let mut group = c.benchmark_group("hotset_90_10");
    let operations = 100_000u64;
    group.throughput(Throughput::Elements(operations));

    for (name, policy) in POLICIES {
        group.bench_function(name, |b| {
            b.iter_custom(|iters| {
                let universe = 16_384u64;
                let hot = universe / 10;
                let mut total = std::time::Duration::default();
                for _ in 0..iters {
                    let mut cache = FrameCache::new(policy, 4096).unwrap();
                    let mut rng = StdRng::seed_from_u64(42);
                    let start = Instant::now();
                    for _ in 0..operations {
                        let raw = if rng.gen_bool(0.9) {
                            rng.gen_range(0..hot)
                        } else {
                            rng.gen_range(hot..universe)
                        };
                        cache.load_page(std::hint::black_box(PageId::new(raw)));
                    }
                    total += start.elapsed();
                }
                total
            })
        });
    }

    group.finish();
}

criterion_group!(end_to_end, bench_warmup_insert, bench_eviction_churn);
criterion_group!(micro_ops, bench_load_hit_ns);
criterion_group!(workloads, bench_hotset_workload);
criterion_main!(end_to_end, micro_ops, workloads);
