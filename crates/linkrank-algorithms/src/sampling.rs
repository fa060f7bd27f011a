//! Monte Carlo PageRank estimation
//!
//! A random surfer walks the corpus using the transition model. At each step the
//! estimate is updated with a running mean of the *whole* transition row of the
//! current page, not with a visit count for the page itself. Both converge to the
//! stationary distribution; the running-mean form has lower variance per step
//! but is not the textbook visit-counting estimator.

use super::common::Corpus;
use super::distribution::Distribution;
use super::error::{check_damping, RankError, RankResult};
use super::transition::{row_sampler, transition_row};
use rand::distributions::Distribution as _;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Sampling configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplingConfig {
    /// Damping factor (usually 0.85)
    pub damping_factor: f64,
    /// Walk length, counting the initial draw
    pub samples: usize,
    /// Seed for the walk; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            samples: 10_000,
            seed: None,
        }
    }
}

/// Estimate PageRank with a walk driven by a generator built from `config.seed`.
pub fn sample_page_rank(corpus: &Corpus, config: &SamplingConfig) -> RankResult<Distribution> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    sample_rank(corpus, config.damping_factor, config.samples, &mut rng)
}

/// Estimate PageRank from a walk of `n` samples drawn with `rng`.
///
/// The first sample picks the start page uniformly; each of the remaining
/// `n - 1` steps folds the current page's transition row into the running mean
/// and then moves to a page drawn from that same row. With `n == 1` the
/// estimate stays all zeros.
///
/// Only the current row is held at any time, so memory stays O(N).
pub fn sample_rank<R: Rng + ?Sized>(
    corpus: &Corpus,
    damping: f64,
    n: usize,
    rng: &mut R,
) -> RankResult<Distribution> {
    check_damping(damping)?;
    if n == 0 {
        return Err(RankError::InvalidSampleCount(n));
    }
    if corpus.is_empty() {
        return Err(RankError::EmptyCorpus);
    }

    let mut estimate = Distribution::zeros(corpus.page_count());
    let mut page = rng.gen_range(0..corpus.page_count());
    debug!(pages = corpus.page_count(), samples = n, start = page, "starting random walk");

    for i in 1..n {
        let current = transition_row(corpus, page, damping);

        let weight = (i - 1) as f64;
        let step = i as f64;
        estimate
            .values_mut()
            .zip_mut_with(current.values(), |acc, &p| *acc = (weight * *acc + p) / step);

        page = row_sampler(&current)?.sample(rng);
    }

    info!(samples = n, total = estimate.sum(), "sampling estimate complete");
    Ok(estimate)
}
