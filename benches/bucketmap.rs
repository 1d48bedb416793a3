#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use bucketmap::GrowableMap;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use proptest::{
    collection,
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn hash_map_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = collection::vec(any::<(String, String)>(), ITEMS_AMOUNT)
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Hash map comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    group.bench_function("bucketmap add", |b| {
        b.iter(|| {
            let mut map = GrowableMap::new();
            for (key, value) in items.clone() {
                map.add(key, value);
            }
            map
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            let mut map = HashMap::new();
            for (key, value) in items.clone() {
                map.insert(key, value);
            }
            map
        });
    });

    let bucket_map: GrowableMap<_, _> = items.iter().cloned().collect();
    let rust_map: HashMap<_, _> = items.iter().cloned().collect();
    group.bench_function("bucketmap get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = bucket_map.get(key);
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = rust_map.get(key);
            }
        });
    });
    group.finish();
}

fn growth_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("Amortized add");
    for exp in [8u32, 12, 16] {
        let n = 1usize << exp;
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut map = GrowableMap::new();
                for i in 0..n {
                    map.add(i, i);
                }
                map
            });
        });
    }
    group.finish();
}

criterion_group!(benches, hash_map_benches, growth_benches);

criterion_main!(benches);
