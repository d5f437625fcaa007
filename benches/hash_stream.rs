use hashstream::rng::HashStreamRng;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_fill_bytes(c: &mut Criterion) {
    let mut rng = HashStreamRng::from_seed([0u8; 64]);
    let mut buf = [0u8; 1024];

    c.bench_function("fill_bytes 1 KiB", |b| {
        b.iter(|| rng.fill_bytes(black_box(&mut buf)))
    });
}

pub fn bench_random_int(c: &mut Criterion) {
    let mut rng = HashStreamRng::from_seed([0u8; 64]);

    c.bench_function("random_int [0, 9]", |b| {
        b.iter(|| rng.random_int(black_box(0u8), black_box(9u8)))
    });
}

pub fn bench_add_entropy(c: &mut Criterion) {
    let mut rng = HashStreamRng::from_seed([0u8; 64]);

    c.bench_function("add_entropy_int", |b| {
        b.iter(|| rng.add_entropy_int(black_box(7u64)))
    });
}

criterion_group!(benches, bench_fill_bytes, bench_random_int, bench_add_entropy);
criterion_main!(benches);
