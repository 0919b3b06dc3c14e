//! Criterion benchmarks for the calculators.
//!
//! Benchmarks:
//! 1. Guarded calculator (text side, including parse)
//! 2. Unguarded calculator
//! 3. Batch evaluation, serial vs parallel

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use avgprice_core::{guarded, unguarded, AdjustmentRequest, Scenario, ScenarioFile};

fn make_file(n: usize) -> ScenarioFile {
    let scenarios = (0..n)
        .map(|i| {
            let pb = 100.0 + (i % 50) as f64;
            let request = if i % 2 == 0 {
                AdjustmentRequest::Guarded {
                    position_type: "long".into(),
                    initial_price: pb,
                    initial_quantity: 50.0,
                    new_price: pb + 20.0,
                    desired_average_price: pb + 10.0,
                }
            } else {
                AdjustmentRequest::Unguarded {
                    initial_price: pb,
                    initial_quantity: 50.0,
                    new_price: pb - 20.0,
                    desired_average_price: pb - 5.0,
                }
            };
            Scenario {
                name: format!("s{i}"),
                request,
            }
        })
        .collect();
    ScenarioFile { scenarios }
}

fn bench_single(c: &mut Criterion) {
    c.bench_function("guarded_compute", |b| {
        b.iter(|| {
            guarded::compute(
                black_box("short"),
                black_box(100.0),
                black_box(50.0),
                black_box(80.0),
                black_box(110.0),
            )
        })
    });

    c.bench_function("unguarded_compute", |b| {
        b.iter(|| {
            unguarded::compute(
                black_box(100.0),
                black_box(50.0),
                black_box(120.0),
                black_box(110.0),
            )
        })
    });
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    for n in [100usize, 10_000] {
        let file = make_file(n);
        group.bench_with_input(BenchmarkId::new("serial", n), &file, |b, f| {
            b.iter(|| f.evaluate(false))
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &file, |b, f| {
            b.iter(|| f.evaluate(true))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single, bench_batch);
criterion_main!(benches);
