//! Performance benchmarks for the contact store.
//!
//! These benchmarks measure:
//! - Bulk creation (phone validation plus ID allocation)
//! - Lookup by ID at different store sizes
//! - Export of a populated store

use contact_store::{Config, ContactStore, Country, Gender};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

const SIZES: [usize; 3] = [10, 100, 1000];

fn populated_store(size: usize, config: &Config) -> ContactStore {
    let mut store = ContactStore::with_config(config);
    for i in 0..size {
        let country = Country::ALL[i % Country::ALL.len()];
        let gender = Gender::ALL[i % Gender::ALL.len()];
        store
            .create(format!("Contact {}", i), "0795432212", country, gender)
            .unwrap();
    }
    store
}

fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create");
    let config = Config::default();

    for size in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| populated_store(black_box(size), &config));
        });
    }

    group.finish();
}

fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");
    let config = Config::default();

    for size in SIZES {
        let store = populated_store(size, &config);
        // Worst case for a linear scan
        let last_id = store.list().last().unwrap().id().clone();

        group.bench_with_input(BenchmarkId::from_parameter(size), &last_id, |b, id| {
            b.iter(|| store.read(black_box(id)).unwrap());
        });
    }

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        export_dir: dir.path().to_path_buf(),
        ..Config::default()
    };
    let store = populated_store(1000, &config);

    c.bench_function("export_1000", |b| {
        b.iter(|| store.export(black_box("bench")).unwrap());
    });
}

criterion_group!(benches, bench_create, bench_read, bench_export);
criterion_main!(benches);
