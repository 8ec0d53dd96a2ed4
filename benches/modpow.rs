use textbook_rsa::encoding::chunk_and_encode;
use textbook_rsa::primitives::{modpow, modpow_in};
use textbook_rsa::rsa::{KeyParams, ToyKeyPair, run};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_modpow(c: &mut Criterion) {
    c.bench_function("modpow toy decrypt", |b| {
        b.iter(|| modpow(black_box(2100), black_box(2011), black_box(3127)))
    });

    c.bench_function("modpow u64 full exponent", |b| {
        b.iter(|| {
            modpow(
                black_box(0x1234_5678_9ABC_DEF0),
                black_box(u64::MAX),
                black_box(0xFFFF_FFFF_FFFF_FFC5),
            )
        })
    });

    c.bench_function("modpow u128 full exponent", |b| {
        b.iter(|| modpow_in(black_box(u128::MAX), black_box(u128::MAX), black_box(1u128 << 64)))
    });
}

pub fn bench_pipeline(c: &mut Criterion) {
    let keys = ToyKeyPair::derive(&KeyParams::default()).unwrap();
    let message = [b'x'; 4096];

    c.bench_function("chunk 4 KiB", |b| {
        b.iter(|| chunk_and_encode(black_box(&message), black_box(1)))
    });

    c.bench_function("round trip 4 KiB", |b| {
        b.iter(|| run(black_box(&message), 1, &keys))
    });
}

criterion_group!(benches, bench_modpow, bench_pipeline);
criterion_main!(benches);
