//! Sieve and full-pipeline benchmarks.
//! Run with: cargo bench -p primes-analysis --bench analysis_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use primes_analysis::{analyze, analyzer, sieve};

fn sieve_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve");
    group.sample_size(20);

    for bound in [10_000i64, 100_000, 2_000_000] {
        group.bench_with_input(BenchmarkId::new("generate", bound), &bound, |b, &bound| {
            b.iter(|| sieve::generate(black_box(bound)));
        });
    }
    group.finish();
}

fn summarize_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyzer");
    group.sample_size(20);

    for bound in [100_000i64, 2_000_000] {
        let primes = sieve::generate(bound);
        group.bench_with_input(BenchmarkId::new("summarize", bound), &primes, |b, primes| {
            b.iter(|| analyzer::summarize(black_box(primes.clone()), bound));
        });
    }
    group.finish();
}

fn full_pipeline(c: &mut Criterion) {
    c.bench_function("analyze_2m", |b| b.iter(|| analyze(black_box(2_000_000))));
}

criterion_group!(benches, sieve_generate, summarize_only, full_pipeline);
criterion_main!(benches);
