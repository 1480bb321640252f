use bin2text::{Codec, Format};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: [usize; 5] = [64, 256, 1024, 4096, 16384];

fn sample(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

fn bench_encode(c: &mut Criterion, format: Format) {
    let codec = Codec::new(format);
    let mut group = c.benchmark_group(format!("encode_{}", format));

    for size in SIZES.iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let data = sample(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| codec.encode(black_box(data)));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion, format: Format) {
    let codec = Codec::new(format);
    let mut group = c.benchmark_group(format!("decode_{}", format));

    for size in SIZES.iter() {
        let encoded = codec.encode(sample(*size));

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| codec.decode_to_bytes(black_box(encoded)).unwrap());
        });
    }
    group.finish();
}

fn bench_base64(c: &mut Criterion) {
    bench_encode(c, Format::Base64);
    bench_decode(c, Format::Base64);
}

fn bench_base32(c: &mut Criterion) {
    bench_encode(c, Format::Base32);
    bench_decode(c, Format::Base32);
}

fn bench_base16(c: &mut Criterion) {
    bench_encode(c, Format::Base16);
    bench_decode(c, Format::Base16);
}

fn bench_base128(c: &mut Criterion) {
    bench_encode(c, Format::Base128);
    bench_decode(c, Format::Base128);
}

criterion_group!(benches, bench_base64, bench_base32, bench_base16, bench_base128);
criterion_main!(benches);
