use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use linkrank::{iterate_rank, sample_rank, Corpus, TransitionModel};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random corpus where every page links to a handful of others
fn random_corpus(pages: usize, links_per_page: usize, seed: u64) -> Corpus {
    let mut rng = StdRng::seed_from_u64(seed);
    let entries: Vec<(String, Vec<String>)> = (0..pages)
        .map(|i| {
            let links = (0..links_per_page)
                .map(|_| format!("{}.html", rng.gen_range(0..pages)))
                .collect();
            (format!("{}.html", i), links)
        })
        .collect();
    Corpus::from_links(entries)
}

/// Benchmark building every transition row and sampler
fn bench_transition_model(c: &mut Criterion) {
    let mut group = c.benchmark_group("transition_model");

    for size in [10, 100, 500].iter() {
        let corpus = random_corpus(*size, 4, 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let model = TransitionModel::build(&corpus, 0.85).unwrap();
                criterion::black_box(model.page_count());
            });
        });
    }
    group.finish();
}

/// Benchmark the random-walk estimator at the default sample count
fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_rank");

    for size in [10, 100, 500].iter() {
        let corpus = random_corpus(*size, 4, 2);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            let mut rng = StdRng::seed_from_u64(3);
            b.iter(|| {
                let ranks = sample_rank(&corpus, 0.85, 10_000, &mut rng).unwrap();
                criterion::black_box(ranks.sum());
            });
        });
    }
    group.finish();
}

/// Benchmark fixed-point iteration to convergence
fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate_rank");

    for size in [10, 100, 1_000, 10_000].iter() {
        let corpus = random_corpus(*size, 4, 4);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let ranks = iterate_rank(&corpus, 0.85).unwrap();
                criterion::black_box(ranks.sum());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transition_model, bench_sampling, bench_iteration);
criterion_main!(benches);
