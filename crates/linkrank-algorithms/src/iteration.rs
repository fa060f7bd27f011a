//! Iterative PageRank
//!
//! Solves `PR(p) = (1 - d) / N + d * sum(PR(q) / L(q))` over pages `q` linking to
//! `p` by synchronous (Jacobi) sweeps. Every sweep reads only the previous
//! sweep's ranks; two buffers are swapped between sweeps.
//!
//! Pages without links contribute nothing to the sum, unlike the transition
//! model which spreads them uniformly. On corpora with dangling pages the
//! result therefore sums to less than 1.

use super::common::{Corpus, PageId};
use super::distribution::Distribution;
use super::error::{check_damping, RankError, RankResult};
use tracing::{info, trace, warn};

/// PageRank configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRankConfig {
    /// Damping factor (usually 0.85)
    pub damping_factor: f64,
    /// Largest per-page change still counted as converged
    pub tolerance: f64,
    /// Sweep cap before giving up
    pub max_iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            tolerance: 0.001,
            max_iterations: 100_000,
        }
    }
}

/// Converged ranks plus the number of sweeps it took
#[derive(Debug, Clone, PartialEq)]
pub struct IterationOutcome {
    pub ranks: Distribution,
    pub iterations: usize,
}

/// Iterate until no page moves by more than `0.001` between two sweeps.
pub fn iterate_rank(corpus: &Corpus, damping: f64) -> RankResult<Distribution> {
    let config = PageRankConfig {
        damping_factor: damping,
        ..Default::default()
    };
    iterate_page_rank(corpus, &config).map(|outcome| outcome.ranks)
}

/// Calculate PageRank by fixed-point iteration
pub fn iterate_page_rank(corpus: &Corpus, config: &PageRankConfig) -> RankResult<IterationOutcome> {
    let d = config.damping_factor;
    check_damping(d)?;
    if !(config.tolerance > 0.0 && config.tolerance.is_finite()) {
        return Err(RankError::InvalidTolerance(config.tolerance));
    }

    let n = corpus.page_count();
    if n == 0 {
        return Err(RankError::EmptyCorpus);
    }

    // 1. Initialize ranks
    let mut ranks = Distribution::uniform(n);

    // A one-page chain is stationary from the start
    if n == 1 {
        return Ok(IterationOutcome {
            ranks,
            iterations: 0,
        });
    }

    let mut next = Distribution::zeros(n);
    let base = (1.0 - d) / n as f64;

    // 2. Sweep until every page is stable in the same sweep
    for iteration in 1..=config.max_iterations {
        let mut max_delta: f64 = 0.0;
        {
            let next_values = next.values_mut();
            for page in 0..n {
                let value = base + d * link_sum(corpus, &ranks, page);
                max_delta = max_delta.max((value - ranks.values()[page]).abs());
                next_values[page] = value;
            }
        }

        // Swap buffers
        std::mem::swap(&mut ranks, &mut next);
        trace!(iteration, max_delta, "pagerank sweep");

        if max_delta <= config.tolerance {
            info!(iterations = iteration, total = ranks.sum(), "iteration converged");
            return Ok(IterationOutcome {
                ranks,
                iterations: iteration,
            });
        }
    }

    warn!(max_iterations = config.max_iterations, "iteration did not converge");
    Err(RankError::NotConverged {
        iterations: config.max_iterations,
    })
}

/// Sum of `ranks[q] / out_degree(q)` over every page `q` linking to `page`.
pub fn link_sum(corpus: &Corpus, ranks: &Distribution, page: PageId) -> f64 {
    let values = ranks.values();
    corpus
        .predecessors(page)
        .iter()
        .map(|&source| values[source] / corpus.out_degree(source) as f64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_page_cycle() {
        let corpus = Corpus::from_links(vec![("A", vec!["B"]), ("B", vec!["A"])]);
        let ranks = iterate_rank(&corpus, 0.85).unwrap();
        assert!((ranks.get(0).unwrap() - 0.5).abs() < 1e-9);
        assert!((ranks.get(1).unwrap() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_single_page() {
        let corpus = Corpus::from_links(vec![("A", Vec::<String>::new())]);
        let outcome = iterate_page_rank(&corpus, &PageRankConfig::default()).unwrap();
        assert_eq!(outcome.ranks.as_slice(), &[1.0]);
        assert_eq!(outcome.iterations, 0);
    }

    #[test]
    fn test_star_graph_centre_ranks_highest() {
        // Centre <-> three leaves
        let corpus = Corpus::from_links(vec![
            ("centre", vec!["a", "b", "c"]),
            ("a", vec!["centre"]),
            ("b", vec!["centre"]),
            ("c", vec!["centre"]),
        ]);
        let ranks = iterate_rank(&corpus, 0.85).unwrap();
        let centre = corpus.page_id("centre").unwrap();
        for leaf in ["a", "b", "c"] {
            let leaf = corpus.page_id(leaf).unwrap();
            assert!(ranks.get(centre).unwrap() > ranks.get(leaf).unwrap());
        }
        assert!((ranks.sum() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_iteration_is_deterministic() {
        let corpus = Corpus::from_links(vec![
            ("1", vec!["2", "3"]),
            ("2", vec!["3"]),
            ("3", vec!["1"]),
            ("4", vec!["1", "3"]),
        ]);
        let first = iterate_rank(&corpus, 0.85).unwrap();
        let second = iterate_rank(&corpus, 0.85).unwrap();
        assert_eq!(first, second);
        assert!((first.sum() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_dangling_pages_leak_mass() {
        // B has no links and passes nothing on
        let corpus = Corpus::from_links(vec![("A", vec!["B"]), ("B", vec![])]);
        let ranks = iterate_rank(&corpus, 0.85).unwrap();
        assert!(ranks.sum() < 1.0);
        assert!((ranks.get(0).unwrap() - 0.075).abs() < 1e-9);
    }

    #[test]
    fn test_link_sum() {
        // A -> B, C -> B (C also -> A)
        let corpus = Corpus::from_links(vec![
            ("A", vec!["B"]),
            ("B", vec![]),
            ("C", vec!["A", "B"]),
        ]);
        let ranks = Distribution::from_vec(vec![0.3, 0.3, 0.4]);
        let b = corpus.page_id("B").unwrap();
        assert!((link_sum(&corpus, &ranks, b) - (0.3 + 0.2)).abs() < 1e-12);
        // nothing links to C
        assert_eq!(link_sum(&corpus, &ranks, 2), 0.0);
    }

    #[test]
    fn test_iteration_cap_reports_non_convergence() {
        let corpus = Corpus::from_links(vec![
            ("A", vec!["B"]),
            ("B", vec!["C"]),
            ("C", vec!["A", "B"]),
        ]);
        let config = PageRankConfig {
            tolerance: 1e-15,
            max_iterations: 2,
            ..Default::default()
        };
        assert_eq!(
            iterate_page_rank(&corpus, &config).unwrap_err(),
            RankError::NotConverged { iterations: 2 }
        );
    }

    #[test]
    fn test_iteration_rejects_bad_input() {
        let empty = Corpus::from_links(Vec::<(String, Vec<String>)>::new());
        assert_eq!(iterate_rank(&empty, 0.85).unwrap_err(), RankError::EmptyCorpus);

        let corpus = Corpus::from_links(vec![("A", vec!["B"]), ("B", vec!["A"])]);
        assert_eq!(
            iterate_rank(&corpus, 1.5).unwrap_err(),
            RankError::InvalidDamping(1.5)
        );
        let config = PageRankConfig {
            tolerance: 0.0,
            ..Default::default()
        };
        assert_eq!(
            iterate_page_rank(&corpus, &config).unwrap_err(),
            RankError::InvalidTolerance(0.0)
        );
    }
}
