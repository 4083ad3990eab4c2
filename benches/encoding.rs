use base_85::{Alphabet, AlphabetRegistry, decode, encode, ipv6_decode, ipv6_encode};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: [usize; 5] = [64, 256, 1024, 4096, 16384];

fn get_alphabet(name: &str) -> Alphabet {
    let registry = AlphabetRegistry::load_default().unwrap();
    registry.alphabet(name).unwrap()
}

fn sample(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

fn bench_encode(c: &mut Criterion, name: &str) {
    let alphabet = get_alphabet(name);
    let mut group = c.benchmark_group(format!("encode_{}", name));

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let data = sample(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| encode(black_box(data), black_box(&alphabet)));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion, name: &str) {
    let alphabet = get_alphabet(name);
    let mut group = c.benchmark_group(format!("decode_{}", name));

    for size in SIZES {
        let encoded = encode(&sample(size), &alphabet);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| decode(black_box(encoded), black_box(&alphabet)).unwrap());
        });
    }
    group.finish();
}

fn bench_ascii85(c: &mut Criterion) {
    bench_encode(c, "ascii85");
    bench_decode(c, "ascii85");
}

fn bench_rfc1924(c: &mut Criterion) {
    bench_encode(c, "rfc1924");
    bench_decode(c, "rfc1924");
}

fn bench_zero_heavy(c: &mut Criterion) {
    let alphabet = get_alphabet("ascii85");
    let data = vec![0u8; 4096];
    let encoded = encode(&data, &alphabet);
    let mut group = c.benchmark_group("zero_groups");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("encode", |b| {
        b.iter(|| encode(black_box(&data), black_box(&alphabet)));
    });
    group.bench_function("decode", |b| {
        b.iter(|| decode(black_box(&encoded), black_box(&alphabet)).unwrap());
    });
    group.finish();
}

fn bench_ipv6(c: &mut Criterion) {
    let value: u128 = 0x1080_0000_0000_0000_0008_0800_200c_417a;
    let encoded = ipv6_encode(value);
    let mut group = c.benchmark_group("ipv6");

    group.bench_function("encode", |b| b.iter(|| ipv6_encode(black_box(value))));
    group.bench_function("decode", |b| {
        b.iter(|| ipv6_decode(black_box(&encoded)).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_ascii85,
    bench_rfc1924,
    bench_zero_heavy,
    bench_ipv6
);
criterion_main!(benches);
