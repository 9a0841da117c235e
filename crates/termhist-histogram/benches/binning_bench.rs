//! Benchmarks for linear and logarithmic binning

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_distr::{LogNormal, Normal};
use termhist_histogram::{bin, create_linear, create_log, Linear, Log10};

/// Generate normal data
fn generate_normal_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(100.0, 15.0).unwrap();
    (0..size).map(|_| normal.sample(&mut rng)).collect()
}

/// Generate heavy-tailed sizes, the shape log buckets are meant for
fn generate_sizes(size: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let log_normal = LogNormal::new(8.0, 2.0).unwrap();
    (0..size)
        .map(|_| log_normal.sample(&mut rng) as u64)
        .collect()
}

fn bench_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear");

    for &size in &[1_000, 10_000, 100_000] {
        let floats = generate_normal_data(size, 42);
        let ints = generate_sizes(size, 43);

        group.bench_with_input(BenchmarkId::new("f64", size), &floats, |b, data| {
            b.iter(|| create_linear(black_box(data), 20))
        });
        group.bench_with_input(BenchmarkId::new("u64", size), &ints, |b, data| {
            b.iter(|| create_linear(black_box(data), 20))
        });
    }

    group.finish();
}

fn bench_log(c: &mut Criterion) {
    let mut group = c.benchmark_group("log");

    for &size in &[1_000, 10_000, 100_000] {
        let ints = generate_sizes(size, 44);
        group.bench_with_input(BenchmarkId::new("u64", size), &ints, |b, data| {
            b.iter(|| create_log(black_box(data), 20))
        });
    }

    group.finish();
}

fn bench_bucket_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("bucket_count");
    let data = generate_sizes(50_000, 45);
    let floor = 1u64;

    for &buckets in &[4, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("linear", buckets), &buckets, |b, &n| {
            b.iter(|| bin(black_box(&data), n, &Linear))
        });
        group.bench_with_input(BenchmarkId::new("log", buckets), &buckets, |b, &n| {
            b.iter(|| bin(black_box(&data), n, &Log10::new(floor)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_linear, bench_log, bench_bucket_count);
criterion_main!(benches);
