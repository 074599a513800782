use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use ledger_codec::{Hash256, SerializedType, UInt32, UInt64};

fn bench_uint_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("uint_codec");

    group.bench_function("encode_u64", |b| {
        b.iter(|| UInt64::new(black_box(0xDEAD_BEEF_CAFE_F00D)));
    });

    let bytes = UInt64::new(0xDEAD_BEEF_CAFE_F00D).to_bytes();
    group.bench_function("decode_u64", |b| {
        b.iter(|| UInt64::from_bytes(black_box(&bytes)).unwrap());
    });

    group.bench_function("to_json_u64", |b| {
        let v = UInt64::new(u64::MAX);
        b.iter(|| black_box(&v).to_json());
    });

    group.bench_function("to_json_u32", |b| {
        let v = UInt32::new(u32::MAX);
        b.iter(|| black_box(&v).to_json());
    });

    group.finish();
}

fn bench_field_ordering(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_ordering");

    let uints: Vec<UInt64> = (0..1024u64).rev().map(UInt64::new).collect();
    group.bench_function("sort_1024_u64", |b| {
        b.iter(|| {
            let mut values = uints.clone();
            values.sort_unstable();
            values
        });
    });

    let hashes: Vec<Hash256> = (0..1024u32)
        .map(|i| {
            let mut bytes = [0u8; 32];
            bytes[..4].copy_from_slice(&i.to_be_bytes());
            bytes.reverse();
            Hash256::from_array(bytes)
        })
        .collect();
    group.bench_function("sort_1024_hash256", |b| {
        b.iter(|| {
            let mut values = hashes.clone();
            values.sort_unstable();
            values
        });
    });

    group.finish();
}

criterion_group!(benches, bench_uint_codec, bench_field_ordering);
criterion_main!(benches);
