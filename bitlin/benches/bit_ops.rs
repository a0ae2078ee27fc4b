use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use bitlin::bit_arr;

type Bits = bit_arr!(317, u64);

fn xorshift(x: Bits) -> Bits {
    let x = x ^ (x << 13);
    let x = x ^ (x >> 7);
    x ^ (x << 17)
}

fn bench_xorshift(c: &mut Criterion) {
    c.bench_function("bitarr_xorshift_317", |b| {
        let mut x = Bits::from_value(123_456_789);
        b.iter(|| {
            x = xorshift(black_box(x));
            x
        });
    });
}

fn bench_popcnt(c: &mut Criterion) {
    c.bench_function("bitarr_popcnt_317", |b| {
        let mut x = Bits::from_value(123_456_789);
        b.iter(|| {
            x = xorshift(x);
            black_box(x.count_ones())
        });
    });
}

criterion_group!(benches, bench_xorshift, bench_popcnt);
criterion_main!(benches);
