use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use patternbook::CommandRegistry;

fn bench_execute_add(c: &mut Criterion) {
    let manager = CommandRegistry::arithmetic();
    c.bench_function("execute add", |b| {
        b.iter(|| manager.execute(black_box("add"), black_box(&[3, 5])))
    });
}

fn bench_execute_unknown(c: &mut Criterion) {
    let manager = CommandRegistry::arithmetic();
    c.bench_function("execute unknown", |b| {
        b.iter(|| manager.execute(black_box("multiply"), black_box(&[2, 2])))
    });
}

fn bench_execute_wrong_arity(c: &mut Criterion) {
    let manager = CommandRegistry::arithmetic();
    c.bench_function("execute wrong arity", |b| {
        b.iter(|| manager.execute(black_box("subtract"), black_box(&[1])))
    });
}

criterion_group!(
    benches,
    bench_execute_add,
    bench_execute_unknown,
    bench_execute_wrong_arity
);
criterion_main!(benches);
