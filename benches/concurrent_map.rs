//! ConcurrentMap benchmarks across hashers and thread counts.
//!
//! Run with: `cargo bench --bench concurrent_map`

use std::hint::black_box;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use leafkit::ds::ConcurrentMap;
use leafkit::hash::Murmur3BuildHasher;
use rustc_hash::FxBuildHasher;

const KEYS: u64 = 16_384;
const OPS: u64 = 100_000;

// ============================================================================
// Single-threaded get/put by hasher
// ============================================================================

fn bench_hashers(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_single_thread");
    group.throughput(Throughput::Elements(OPS));

    group.bench_function("get_std", |b| {
        let map: ConcurrentMap<u64, u64> = (0..KEYS).map(|k| (k, k)).collect();
        b.iter(|| {
            for i in 0..OPS {
                black_box(map.get(&(i % KEYS)));
            }
        })
    });

    group.bench_function("get_fx", |b| {
        let map: ConcurrentMap<u64, u64, FxBuildHasher> = (0..KEYS).map(|k| (k, k)).collect();
        b.iter(|| {
            for i in 0..OPS {
                black_box(map.get(&(i % KEYS)));
            }
        })
    });

    group.bench_function("get_murmur3", |b| {
        let map: ConcurrentMap<u64, u64, Murmur3BuildHasher> =
            (0..KEYS).map(|k| (k, k)).collect();
        b.iter(|| {
            for i in 0..OPS {
                black_box(map.get(&(i % KEYS)));
            }
        })
    });

    group.bench_function("put_std", |b| {
        let map: ConcurrentMap<u64, u64> = ConcurrentMap::with_capacity(KEYS as usize);
        b.iter(|| {
            for i in 0..OPS {
                map.put(i % KEYS, i);
            }
        })
    });

    group.finish();
}

// ============================================================================
// Read-heavy mixed workload under contention
// ============================================================================

fn bench_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_contended");

    for threads in [1usize, 2, 4, 8] {
        group.throughput(Throughput::Elements(OPS * threads as u64));
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            b.iter_custom(|iters| {
                let map: Arc<ConcurrentMap<u64, u64>> =
                    Arc::new((0..KEYS).map(|k| (k, k)).collect());
                let start = Instant::now();
                for _ in 0..iters {
                    let handles: Vec<_> = (0..threads as u64)
                        .map(|tid| {
                            let map = map.clone();
                            thread::spawn(move || {
                                for i in 0..OPS {
                                    let key = (i * 7 + tid) % KEYS;
                                    // 1 write per 10 reads.
                                    if i % 10 == 0 {
                                        map.put(key, i);
                                    } else {
                                        black_box(map.get(&key));
                                    }
                                }
                            })
                        })
                        .collect();
                    for handle in handles {
                        let _ = handle.join();
                    }
                }
                start.elapsed()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hashers, bench_contended);
criterion_main!(benches);
