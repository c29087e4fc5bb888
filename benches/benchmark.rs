use criterion::{criterion_group, criterion_main, Criterion};

use rand_srng::*;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut srng1 = Srng::new();
    c.bench_function("Srng::next_byte", move |b| b.iter(|| srng1.next_byte()));
    let mut srng2 = Srng::new();
    c.bench_function("Srng::next_halfword", move |b| b.iter(|| srng2.next_halfword()));
    let mut srng3 = Srng::new();
    c.bench_function("Srng::range", move |b| b.iter(|| srng3.range(1000)));
    let mut srng4 = Srng::new();
    c.bench_function("Srng::reseed", move |b| b.iter(|| srng4.reseed()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
