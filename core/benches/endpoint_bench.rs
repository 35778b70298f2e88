//! Criterion benchmarks for the endpoint codec.
//!
//! Run with: cargo bench -p endpoint-core

use std::net::{Ipv4Addr, SocketAddrV4};

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use endpoint_core::constants::ENDPOINT_LEN;
use endpoint_core::endpoint::{decode_endpoint, encode_endpoint, read_endpoint, write_endpoint};

fn bench_endpoint(c: &mut Criterion) {
    let endpoint = SocketAddrV4::new(Ipv4Addr::new(192, 168, 0, 1), 7946);
    let wire = encode_endpoint(&endpoint);

    let mut group = c.benchmark_group("endpoint");
    group.throughput(Throughput::Bytes(ENDPOINT_LEN as u64));

    group.bench_function("encode", |b| {
        b.iter(|| encode_endpoint(black_box(&endpoint)));
    });

    group.bench_function("decode", |b| {
        b.iter(|| decode_endpoint(black_box(&wire)));
    });

    // Fixed-capacity sink, reset every iteration
    group.bench_function("write_slice", |b| {
        let mut buf = [0u8; ENDPOINT_LEN];
        b.iter(|| {
            let mut sink: &mut [u8] = &mut buf;
            write_endpoint(&mut sink, black_box(endpoint))
        });
    });

    group.bench_function("read_slice", |b| {
        b.iter(|| {
            let mut src: &[u8] = black_box(&wire);
            read_endpoint(&mut src)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_endpoint);
criterion_main!(benches);
