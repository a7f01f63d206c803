//! Benchmark for ListMap vs standard HashMap and BTreeMap.
//!
//! ListMap scans linearly, so it is expected to win only for small sizes.
//! The sizes below straddle the inline capacity.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use listmap::map::ListMap;
use std::collections::{BTreeMap, HashMap};

const SIZES: [usize; 4] = [4, 8, 32, 256];

// =============================================================================
// add Benchmark
// =============================================================================

fn benchmark_add(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("add");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("ListMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = ListMap::new();
                for index in 0..size {
                    map.add(black_box(index), black_box(index * 2)).unwrap();
                }
                black_box(map)
            });
        });

        group.bench_with_input(BenchmarkId::new("HashMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = HashMap::new();
                for index in 0..size {
                    map.insert(black_box(index), black_box(index * 2));
                }
                black_box(map)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = BTreeMap::new();
                for index in 0..size {
                    map.insert(black_box(index), black_box(index * 2));
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in SIZES {
        let list_map: ListMap<usize, usize> = (0..size)
            .map(|index| (index, index * 2))
            .collect::<Vec<_>>()
            .try_into()
            .unwrap();
        let hash_map: HashMap<usize, usize> = (0..size).map(|index| (index, index * 2)).collect();

        group.bench_with_input(BenchmarkId::new("ListMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                for index in 0..size {
                    black_box(list_map.get(black_box(&index)).ok());
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("HashMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                for index in 0..size {
                    black_box(hash_map.get(black_box(&index)));
                }
            });
        });
    }

    group.finish();
}

// =============================================================================
// remove Benchmark
// =============================================================================

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove");

    for size in SIZES {
        let list_map: ListMap<usize, usize> = (0..size)
            .map(|index| (index, index))
            .collect::<Vec<_>>()
            .try_into()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("ListMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = list_map.clone();
                for index in 0..size {
                    black_box(map.remove(black_box(&index)));
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_add, benchmark_get, benchmark_remove);
criterion_main!(benches);
