//! Benchmark for the containers: Maybe chains, Either chains and try_catch.
//!
//! Measures the cost of short-circuiting compared with running a full chain.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use railway::control::{Either, Maybe, try_catch};
use std::hint::black_box;

// =============================================================================
// Maybe Benchmarks
// =============================================================================

fn benchmark_maybe_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("maybe_chain");

    for depth in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::new("present", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut maybe = Maybe::present(black_box(0_u64));
                for _ in 0..depth {
                    maybe = maybe.chain(|n| Maybe::present(n.wrapping_add(1)));
                }
                black_box(maybe.get_or_else(0))
            });
        });

        group.bench_with_input(BenchmarkId::new("empty", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut maybe: Maybe<u64> = black_box(Maybe::empty());
                for _ in 0..depth {
                    maybe = maybe.chain(|n| Maybe::present(n.wrapping_add(1)));
                }
                black_box(maybe.get_or_else(0))
            });
        });
    }

    group.finish();
}

// =============================================================================
// Either Benchmarks
// =============================================================================

fn benchmark_either_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("either_chain");

    for depth in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::new("right", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut either: Either<String, u64> = Either::Right(black_box(0));
                for _ in 0..depth {
                    either = either.chain(|n| Either::Right(n.wrapping_add(1)));
                }
                black_box(either.catch(|_| 0))
            });
        });

        group.bench_with_input(BenchmarkId::new("left", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut either: Either<String, u64> = Either::Left(black_box("failed".to_string()));
                for _ in 0..depth {
                    either = either.chain(|n| Either::Right(n.wrapping_add(1)));
                }
                black_box(either.catch(|_| 0))
            });
        });
    }

    group.finish();
}

// =============================================================================
// try_catch Benchmarks
// =============================================================================

fn benchmark_try_catch(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("try_catch");
    let parse = try_catch(|text: &str| text.parse::<u32>());

    group.bench_function("success", |bencher| {
        bencher.iter(|| black_box(parse(black_box("12345"))));
    });

    group.bench_function("failure", |bencher| {
        bencher.iter(|| black_box(parse(black_box("12a45"))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_maybe_chain,
    benchmark_either_chain,
    benchmark_try_catch
);
criterion_main!(benches);
