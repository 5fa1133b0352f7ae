// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use std::cell::Cell;
use understory_swipe::config::SwipeConfig;
use understory_swipe::gesture::{SamplePoint, classify};
use understory_swipe::input::{PointerEvent, PointerPhase};
use understory_swipe::recognizer::SwipeRecognizer;
use understory_swipe::registry::SwipeRegistry;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 11) as f64) / ((1_u64 << 53) as f64)
    }
}

fn endpoints(n: usize, seed: u64) -> Vec<(SamplePoint, SamplePoint)> {
    let mut rng = Lcg(seed);
    (0..n)
        .map(|_| {
            let start = SamplePoint::new(Point::new(500.0, 500.0), 0);
            let end = Point::new(
                500.0 + (rng.next_f64() - 0.5) * 400.0,
                500.0 + (rng.next_f64() - 0.5) * 400.0,
            );
            let t = (rng.next_f64() * 1500.0) as u64;
            (start, SamplePoint::new(end, t))
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe/classify");
    let config = SwipeConfig::default();
    for n in [1_024_usize, 16_384] {
        let samples = endpoints(n, 0x5717_E000_0000_0001);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &samples, |b, samples| {
            b.iter(|| {
                let mut hits = 0_usize;
                for &(start, end) in samples {
                    hits += usize::from(classify(&config, start, end).is_ok());
                }
                black_box(hits)
            });
        });
    }
    group.finish();
}

fn bench_interaction(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe/interaction");
    for moves in [0_usize, 16, 128] {
        group.bench_with_input(BenchmarkId::new("moves", moves), &moves, |b, &moves| {
            let now = Cell::new(0_u64);
            let mut rec = SwipeRecognizer::new(SwipeConfig::default(), || now.get());
            rec.listeners_mut().on_any(|n| {
                black_box(n.name);
            });
            b.iter(|| {
                now.set(0);
                let _ = rec.on_start(&PointerEvent::mouse(1_u32, Point::new(400.0, 300.0)));
                for i in 0..moves {
                    let x = 400.0 - i as f64;
                    black_box(rec.on_move(&PointerEvent::mouse(1, Point::new(x, 302.0))));
                }
                now.set(200);
                black_box(rec.on_stop(&PointerEvent::mouse(1, Point::new(300.0, 305.0))))
            });
        });
    }
    group.finish();
}

fn bench_registry_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe/registry_dispatch");
    for elements in [16_u32, 1_024] {
        group.bench_with_input(
            BenchmarkId::from_parameter(elements),
            &elements,
            |b, &elements| {
                let now = Cell::new(0_u64);
                let mut registry = SwipeRegistry::new(|| now.get());
                for e in 0..elements {
                    registry.attach(e, SwipeConfig::default());
                }
                let target = elements / 2;
                b.iter(|| {
                    now.set(0);
                    let start = PointerEvent::mouse(target, Point::new(0.0, 0.0));
                    registry.dispatch(&target, PointerPhase::Start, &start);
                    now.set(100);
                    let stop = PointerEvent::mouse(target, Point::new(0.0, -120.0));
                    black_box(registry.dispatch(&target, PointerPhase::Stop, &stop))
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_classify,
    bench_interaction,
    bench_registry_dispatch
);
criterion_main!(benches);
