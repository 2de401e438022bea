//! Benchmarks for the typed operations against the dynamic `Array` package.
//!
//! Run with: `cargo bench --bench ops`

use bumpalo::Bump;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use seqkit_core::api::EnvironmentBuilder;
use seqkit_core::ops;
use seqkit_core::stdlib::register_stdlib;
use seqkit_core::values::binder::Binder;
use seqkit_core::values::{ClosureFunction, FfiContext, Value};

fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_double");

    for size in [16, 256, 4096] {
        let numbers: Vec<f64> = (0..size).map(f64::from).collect();

        group.bench_with_input(BenchmarkId::new("typed", size), &numbers, |b, numbers| {
            b.iter(|| black_box(ops::map(black_box(numbers), |x, _, _| x * 2.0)));
        });

        group.bench_with_input(BenchmarkId::new("dynamic", size), &numbers, |b, numbers| {
            // Values borrow their arena, so each iteration builds its own
            // environment and input as part of the measurement.
            b.iter(|| {
                let arena = Bump::new();
                let env = register_stdlib(&arena, EnvironmentBuilder::new(&arena))
                    .build()
                    .unwrap();
                let ctx = FfiContext::new(&arena);
                let array =
                    Value::array_from_iter(&arena, numbers.iter().map(|n| Value::number(*n)));
                let double = Value::function(
                    &arena,
                    ClosureFunction::new("double", |_, args| {
                        Ok(Value::number(args[0].as_number().unwrap_or(f64::NAN) * 2.0))
                    }),
                );
                let mapped = env.call(&ctx, "Array.map", &[array, double]).unwrap();
                black_box(mapped.type_name());
            });
        });
    }

    group.finish();
}

fn bench_includes(c: &mut Criterion) {
    let mut group = c.benchmark_group("includes_last");

    for size in [16, 256, 4096] {
        let numbers: Vec<f64> = (0..size).map(f64::from).collect();
        let needle = f64::from(size - 1);
        group.bench_with_input(BenchmarkId::new("typed", size), &numbers, |b, numbers| {
            b.iter(|| black_box(ops::includes(black_box(numbers), &needle, None)));
        });
    }

    group.finish();
}

fn bench_reduce(c: &mut Criterion) {
    let numbers: Vec<i64> = (0..4096).collect();
    c.bench_function("reduce_sum_4096", |b| {
        b.iter(|| black_box(ops::reduce(black_box(&numbers), |acc, x, _, _| acc + x)))
    });
}

criterion_group!(benches, bench_map, bench_includes, bench_reduce);
criterion_main!(benches);
