use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use patternbook::{fizz_buzz, random_hex_color_with, shuffle_with};
use rand::{rngs::SmallRng, SeedableRng};

fn bench_shuffle(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(7);
    c.bench_function("shuffle 1k", |b| {
        b.iter_batched(
            || (0..1_000u32).collect::<Vec<_>>(),
            |mut items| {
                shuffle_with(&mut items, &mut rng);
                items
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_hex_color(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(7);
    c.bench_function("random hex color", |b| {
        b.iter(|| black_box(random_hex_color_with(&mut rng)))
    });
}

fn bench_fizz_buzz(c: &mut Criterion) {
    c.bench_function("fizz_buzz 100", |b| b.iter(|| fizz_buzz(black_box(100))));
}

criterion_group!(benches, bench_shuffle, bench_hex_color, bench_fizz_buzz);
criterion_main!(benches);
