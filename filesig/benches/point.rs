//! secp256k1 `AffinePoint` and field benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use filesig::{AffinePoint, FieldElement, Scalar};
use hex_literal::hex;
use std::hint::black_box;

const SCALAR: [u8; 32] = hex!("9bb0d8b72602b70dd5cfed99607a2e2c021dd0fe3b3af842df02c06f8c1a0f4e");

fn bench_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("AffinePoint");

    let g = AffinePoint::generator();
    let p = g.double();
    let k = Scalar::from_be_bytes(&SCALAR);

    group.bench_function("add", |b| b.iter(|| black_box(&g) + black_box(&p)));
    group.bench_function("double", |b| b.iter(|| black_box(&p).double()));
    group.bench_function("scalar_mul", |b| b.iter(|| black_box(&g) * black_box(&k)));

    group.finish();
}

fn bench_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("FieldElement");

    let x = FieldElement::from_be_bytes(&SCALAR);
    let y = x.double();

    group.bench_function("mul", |b| b.iter(|| black_box(&x) * black_box(&y)));
    group.bench_function("invert", |b| b.iter(|| black_box(&x).invert()));
    group.bench_function("pow(-1)", |b| b.iter(|| black_box(&x).pow(-1)));

    group.finish();
}

criterion_group!(benches, bench_point, bench_field);
criterion_main!(benches);
