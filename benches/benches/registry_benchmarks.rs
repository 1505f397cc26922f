use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use patternbook::TopicRegistry;

fn bench_subscribe(c: &mut Criterion) {
    c.bench_function("registry_subscribe", |b| {
        let mut registry: TopicRegistry<u64> = TopicRegistry::new();
        b.iter(|| {
            black_box(registry.subscribe("chan", |_| {}));
        })
    });
}

fn bench_unsubscribe(c: &mut Criterion) {
    c.bench_function("registry_subscribe_unsubscribe", |b| {
        let mut registry: TopicRegistry<u64> = TopicRegistry::new();
        // фоновые подписчики, чтобы retain проходил по списку
        for _ in 0..16 {
            registry.subscribe("chan", |_| {});
        }
        b.iter(|| {
            let id = registry.subscribe("chan", |_| {});
            black_box(registry.unsubscribe("chan", id));
        })
    });
}

fn bench_publish(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_publish");
    for subs in [0usize, 1, 10, 100] {
        let mut registry: TopicRegistry<u64> = TopicRegistry::new();
        for _ in 0..subs {
            registry.subscribe("chan", |v| {
                black_box(*v);
            });
        }
        group.bench_with_input(BenchmarkId::from_parameter(subs), &subs, |b, _| {
            b.iter(|| black_box(registry.publish("chan", black_box(&42))))
        });
    }
    group.finish();
}

fn bench_publish_unknown(c: &mut Criterion) {
    let mut registry: TopicRegistry<u64> = TopicRegistry::new();
    registry.subscribe("chan", |_| {});
    c.bench_function("registry_publish_unknown_topic", |b| {
        b.iter(|| black_box(registry.publish("missing", black_box(&1))))
    });
}

criterion_group!(
    benches,
    bench_subscribe,
    bench_unsubscribe,
    bench_publish,
    bench_publish_unknown
);
criterion_main!(benches);
