use criterion::{black_box, criterion_group, criterion_main, Criterion};

use icon_addresses::Address;

pub fn encode_benchmark(c: &mut Criterion) {
    c.bench_function("Address::into::String", |b| {
        let address: Address = "hx4873b94352c8c1f3b2f09aaeccea31ce9e90bd31".try_into().expect("Should work");
        b.iter(|| -> String { Address::into(black_box(address)) })
    });
}

pub fn decode_benchmark(c: &mut Criterion) {
    c.bench_function("String::into::Address", |b| {
        let address = "cxb0776ee37f5b45bfaea8cec1d33bccb7f3d37a19".to_string();
        b.iter(|| -> Address { String::try_into(black_box(address.clone())).expect("Should work") })
    });
}

criterion_group!(benches, encode_benchmark, decode_benchmark);
criterion_main!(benches);
