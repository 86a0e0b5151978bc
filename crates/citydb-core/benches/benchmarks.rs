use citydb_core::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn synthetic(n: usize) -> Vec<RawCityInput> {
    let zones = ["Europe/Berlin", "America/Chicago", "Asia/Tokyo", "Africa/Cairo"];
    (0..n)
        .map(|i| {
            RawCityInput::new(
                &format!("City {i}"),
                &format!("Country {}", i % 50),
                zones[i % zones.len()],
                (i % 180) as f64 - 90.0,
                (i % 360) as f64 - 180.0,
            )
            .with_state(&format!("State {}", i % 7))
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let raw = synthetic(2_000);
    c.bench_function("catalog_build_2000", |b| {
        b.iter(|| Catalog::build(black_box(raw.clone())))
    });
}

fn bench_lookup(c: &mut Criterion) {
    let catalog = Catalog::build(synthetic(2_000));
    c.bench_function("find_by_slug", |b| {
        b.iter(|| catalog.find_by_slug(black_box("City 1234")))
    });
}

fn bench_search(c: &mut Criterion) {
    let catalog = Catalog::build(synthetic(2_000));
    c.bench_function("search_substring", |b| {
        b.iter(|| catalog.search(black_box("city 12"), 10))
    });
    c.bench_function("search_empty", |b| b.iter(|| catalog.search(black_box(""), 10)));
}

criterion_group!(benches, bench_build, bench_lookup, bench_search);
criterion_main!(benches);
