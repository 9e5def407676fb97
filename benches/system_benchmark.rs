//! Driver benchmarks
//!
//! Measures a full run of the demo diagram and of a deep lag chain.

use blocksim::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn demo_recorder() -> Recorder {
    let s = shared(Step::default());
    let t = shared(Step::new("t", 2.0, 0.0, -1.0));
    let sum = shared(Add::new("s+t", vec![s, t]));
    let lag = shared(FirstOrderDelay::lag("1st-order-delay", 0.1, sum.clone()).unwrap());
    Recorder::new(vec![lag, sum]).unwrap()
}

fn bench_demo_run(c: &mut Criterion) {
    c.bench_function("demo run 300 steps", |b| {
        b.iter(|| {
            let mut recorder = demo_recorder();
            let mut system = System::new();
            system.add(&mut recorder);
            black_box(system.run(3.0, black_box(0.01)).unwrap());
        });
    });
}

/// Chain of `depth` lags, each fed by the previous one
fn bench_lag_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("Lag chain");

    for depth in [1, 10, 50].iter() {
        group.bench_with_input(BenchmarkId::new("depth", depth), depth, |b, &depth| {
            b.iter(|| {
                let mut last: BlockRef = shared(Step::unit("u", 0.0));
                for i in 0..depth {
                    last = shared(FirstOrderDelay::lag(format!("lag{i}"), 0.1, last).unwrap());
                }
                let mut recorder = Recorder::new(vec![last]).unwrap();
                let mut system = System::new();
                system.add(&mut recorder);
                black_box(system.run(1.0, 0.001).unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_demo_run, bench_lag_chain);
criterion_main!(benches);
