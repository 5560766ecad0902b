use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use real_poly::{Poly, Poly64};

criterion_main!(micro_benches, realistic_benches);
criterion_group!(micro_benches, mul, pow, compose, eval);

fn dense(degree: usize) -> Poly64 {
    (0..=degree).map(|i| (i % 7) as f64 - 3.0).collect()
}

pub fn mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");
    for n in [1, 2, 4, 8, 16, 32, 64, 128] {
        let p = dense(n);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(black_box(&p) * black_box(&p)))
        });
    }
    group.finish();
}

pub fn pow(c: &mut Criterion) {
    let mut group = c.benchmark_group("pow");
    let p = Poly::new(&[1.0, 1.0]);
    for n in [1, 2, 4, 8, 16, 32, 64] {
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(p.pow(black_box(n))))
        });
    }
    group.finish();
}

pub fn compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let inner = Poly::new(&[1.0, -2.0, 1.0]);
    for n in [1, 2, 4, 8, 16] {
        let outer = dense(n);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(outer.compose(black_box(&inner))))
        });
    }
    group.finish();
}

pub fn eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");
    for n in [1, 4, 16, 64, 256] {
        let p = dense(n);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(p.eval(black_box(0.5))))
        });
    }
    group.finish();
}

criterion_group!(realistic_benches, parse_and_print);

pub fn parse_and_print(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse and print");
    for n in [1, 4, 16, 64] {
        let text = dense(n).to_string();
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                black_box(
                    Poly64::from_string(black_box(&text))
                        .map(|p| p.derivative().to_string()),
                )
            })
        });
    }
    group.finish();
}
