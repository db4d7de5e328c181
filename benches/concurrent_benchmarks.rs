//! Concurrent Forgetting Map Benchmarks
//!
//! Measures throughput of the mutex-guarded map under multi-threaded access
//! patterns: read-heavy, write-heavy, and mixed.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use forgetting_map::ConcurrentForgettingMap;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::thread;

const MAP_SIZE: usize = 10_000;
const THREADS: usize = 8;
const OPS_PER_THREAD: usize = 1_000;

fn run_concurrent_reads(map: Arc<ConcurrentForgettingMap<usize, usize>>) {
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let map = Arc::clone(&map);
            thread::spawn(move || {
                for i in 0..OPS_PER_THREAD {
                    black_box(map.find(&((t * OPS_PER_THREAD + i) % MAP_SIZE)));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

fn run_concurrent_writes(map: Arc<ConcurrentForgettingMap<usize, usize>>) {
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let map = Arc::clone(&map);
            thread::spawn(move || {
                for i in 0..OPS_PER_THREAD {
                    black_box(map.insert(t * OPS_PER_THREAD + i, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

fn run_mixed(map: Arc<ConcurrentForgettingMap<usize, usize>>) {
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let map = Arc::clone(&map);
            thread::spawn(move || {
                for i in 0..OPS_PER_THREAD {
                    let key = t * OPS_PER_THREAD + i;
                    if i % 4 == 0 {
                        black_box(map.insert(key, i));
                    } else {
                        black_box(map.find(&(key % MAP_SIZE)));
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

fn concurrent_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent Reads");
    group.throughput(Throughput::Elements((THREADS * OPS_PER_THREAD) as u64));

    let map: Arc<ConcurrentForgettingMap<usize, usize>> = Arc::new(
        ConcurrentForgettingMap::new(NonZeroUsize::new(MAP_SIZE).unwrap()),
    );
    for i in 0..MAP_SIZE {
        map.insert(i, i);
    }

    group.bench_function("find", |b| {
        b.iter(|| {
            run_concurrent_reads(Arc::clone(&map));
        });
    });

    group.finish();
}

fn concurrent_writes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent Writes");
    group.throughput(Throughput::Elements((THREADS * OPS_PER_THREAD) as u64));

    group.bench_function("insert", |b| {
        let map: Arc<ConcurrentForgettingMap<usize, usize>> = Arc::new(
            ConcurrentForgettingMap::new(NonZeroUsize::new(MAP_SIZE).unwrap()),
        );
        b.iter(|| {
            run_concurrent_writes(Arc::clone(&map));
        });
    });

    group.finish();
}

fn concurrent_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent Mixed");
    group.throughput(Throughput::Elements((THREADS * OPS_PER_THREAD) as u64));

    group.bench_function("75r/25w", |b| {
        let map: Arc<ConcurrentForgettingMap<usize, usize>> = Arc::new(
            ConcurrentForgettingMap::new(NonZeroUsize::new(MAP_SIZE).unwrap()),
        );
        for i in 0..MAP_SIZE {
            map.insert(i, i);
        }
        b.iter(|| {
            run_mixed(Arc::clone(&map));
        });
    });

    group.finish();
}

criterion_group!(benches, concurrent_reads, concurrent_writes, concurrent_mixed);
criterion_main!(benches);
