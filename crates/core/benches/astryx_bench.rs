//! Benchmark for the Astryx GAQWH algorithm

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use astryx_core::Astryx;

/// Deterministic pseudo-random buffer so runs are comparable.
fn pseudo_random_buf(len: usize) -> Vec<u8> {
    let mut seed = 0x243F6A8885A308D3u64;
    (0..len)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            (seed >> 56) as u8
        })
        .collect()
}

fn bench_hash_short(c: &mut Criterion) {
    let engine = Astryx::new(256).unwrap();
    let input = b"benchmark input data for testing astryx throughput";

    c.bench_function("astryx_short", |b| {
        b.iter(|| engine.hash(black_box(input.as_slice())))
    });
}

fn bench_hash_1kib(c: &mut Criterion) {
    let engine = Astryx::new(256).unwrap();
    let input = pseudo_random_buf(1024);

    let mut group = c.benchmark_group("astryx_throughput");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("astryx_1kib", |b| {
        b.iter(|| engine.hash(black_box(input.as_slice())))
    });
    group.finish();
}

fn bench_hash_512bit(c: &mut Criterion) {
    let engine = Astryx::new(512).unwrap();
    let input = b"benchmark input data for testing astryx throughput";

    c.bench_function("astryx_short_512", |b| {
        b.iter(|| engine.hash(black_box(input.as_slice())))
    });
}

criterion_group!(benches, bench_hash_short, bench_hash_1kib, bench_hash_512bit);
criterion_main!(benches);
