//! Benchmarks comparing the solver families on random 3-SAT.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use satkernel::generate::random_k_sat;
use satkernel::kernel::normalize_to_kernel;
use satkernel::prelude::*;

/// A reproducible 3-SAT instance at a satisfiable clause/variable ratio.
fn instance(num_variables: usize, seed: u64) -> Instance {
    let mut rng = StdRng::seed_from_u64(seed);
    random_k_sat(num_variables, num_variables * 3, 3, &mut rng).unwrap()
}

fn bench_complete_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("complete");

    for n in [8, 10, 12].iter() {
        let problem = instance(*n, 42);
        group.bench_with_input(BenchmarkId::new("brute_force", n), n, |b, _| {
            b.iter(|| solve_brute_force(black_box(&problem)))
        });
        group.bench_with_input(BenchmarkId::new("dpll_dlis", n), n, |b, _| {
            b.iter(|| solve_dpll(black_box(&problem), heuristics::dlis))
        });
        group.bench_with_input(BenchmarkId::new("dpll_mom", n), n, |b, _| {
            b.iter(|| solve_dpll(black_box(&problem), heuristics::mom))
        });
        group.bench_with_input(BenchmarkId::new("cdcl", n), n, |b, _| {
            b.iter(|| solve_cdcl(black_box(&problem), heuristics::dlis))
        });
        group.bench_with_input(BenchmarkId::new("monien_speckenmeyer", n), n, |b, _| {
            b.iter(|| solve_monien_speckenmeyer(black_box(&problem), true))
        });
    }

    group.finish();
}

fn bench_randomized_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("randomized");

    for n in [8, 10].iter() {
        let problem = instance(*n, 7);
        group.bench_with_input(BenchmarkId::new("ppz", n), n, |b, _| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(0);
                solve_ppz(black_box(&problem), DEFAULT_ERROR_RATE, &mut rng)
            })
        });
        group.bench_with_input(BenchmarkId::new("schoening", n), n, |b, _| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(0);
                solve_schoening(black_box(&problem), DEFAULT_ERROR_RATE, &mut rng)
            })
        });
        group.bench_with_input(BenchmarkId::new("walksat", n), n, |b, _| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(0);
                solve_walksat(
                    black_box(&problem),
                    DEFAULT_MAX_TRIES,
                    DEFAULT_WALK_PROBABILITY,
                    &mut rng,
                )
            })
        });
    }

    group.finish();
}

fn bench_kernelization(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernelize");

    for n in [10, 20].iter() {
        let problem = instance(*n, 3);
        group.bench_with_input(BenchmarkId::new("normalize", n), n, |b, _| {
            b.iter(|| normalize_to_kernel(black_box(&problem)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_complete_solvers,
    bench_randomized_solvers,
    bench_kernelization
);
criterion_main!(benches);
