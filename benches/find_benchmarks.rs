#![allow(unused_must_use)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordgrid::{Finder, Grid};

/// Builds a size x size grid with a few real words planted among filler
fn create_test_grid(size: usize) -> Grid {
    let mut rows: Vec<String> = (0..size)
        .map(|i| {
            (0..size)
                .map(|j| char::from(b'a' + ((i * 7 + j * 13) % 26) as u8))
                .collect()
        })
        .collect();
    if size >= 4 {
        rows[0].replace_range(0..4, "rain");
        rows[size - 1].replace_range(size - 4..size, "wind");
    }
    Grid::new(&rows).unwrap()
}

fn create_test_stream(len: usize) -> Vec<String> {
    let seed = ["rain", "wind", "chill", "weather", "snow", "cold"];
    (0..len).map(|i| seed[i % seed.len()].to_string()).collect()
}

fn bench_grid_scaling(c: &mut Criterion) {
    let stream = create_test_stream(100);

    let mut group = c.benchmark_group("Grid Scaling");
    for size in [8, 16, 32, 64] {
        let finder = Finder::new(create_test_grid(size));
        group.bench_function(format!("grid_{}x{}", size, size), |b| {
            b.iter(|| black_box(finder.find(&stream).unwrap()));
        });
    }
    group.finish();
}

fn bench_stream_scaling(c: &mut Criterion) {
    let finder = Finder::new(create_test_grid(64));

    let mut group = c.benchmark_group("Stream Scaling");
    for len in [10, 100, 1_000, 10_000] {
        let stream = create_test_stream(len);
        group.bench_function(format!("words_{}", len), |b| {
            b.iter(|| black_box(finder.find(&stream).unwrap()));
        });
    }
    group.finish();
}

fn bench_duplicate_heavy_stream(c: &mut Criterion) {
    let finder = Finder::new(create_test_grid(64));

    // Same total length, very different distinct-word counts: the memoized
    // presence test makes the duplicate-heavy stream much cheaper per word
    let distinct: Vec<String> = (0..1_000)
        .map(|i| format!("word{:04}", i))
        .collect();
    let duplicated: Vec<String> = (0..1_000)
        .map(|i| format!("word{:04}", i % 10))
        .collect();

    let mut group = c.benchmark_group("Duplicate Heavy Stream");
    group.bench_function("distinct_1000", |b| {
        b.iter(|| black_box(finder.find(&distinct).unwrap()));
    });
    group.bench_function("ten_words_x100", |b| {
        b.iter(|| black_box(finder.find(&duplicated).unwrap()));
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = bench_grid_scaling, bench_stream_scaling, bench_duplicate_heavy_stream
}

#[test]
fn ensure_benchmarks_valid() {
    benches();
}

criterion_main!(benches);
