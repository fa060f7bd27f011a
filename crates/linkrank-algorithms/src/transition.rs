//! Random-surfer transition model
//!
//! One step of the surfer: with probability `damping` follow one of the current
//! page's links uniformly, otherwise jump to any page uniformly. A page without
//! links is treated as linking to every page.

use super::common::{Corpus, PageId};
use super::distribution::Distribution;
use super::error::{check_damping, RankError, RankResult};
use rand::distributions::{Distribution as _, WeightedIndex};
use rand::Rng;
use rayon::prelude::*;

/// Probability distribution over the next page given the current `page`.
pub fn transition(corpus: &Corpus, page: PageId, damping: f64) -> RankResult<Distribution> {
    check_damping(damping)?;
    if page >= corpus.page_count() {
        return Err(RankError::UnknownPage(format!("#{}", page)));
    }
    Ok(transition_row(corpus, page, damping))
}

/// [`transition`] addressed by page identifier.
pub fn transition_by_name(corpus: &Corpus, name: &str, damping: f64) -> RankResult<Distribution> {
    let page = corpus
        .page_id(name)
        .ok_or_else(|| RankError::UnknownPage(name.to_string()))?;
    transition(corpus, page, damping)
}

/// Unchecked row computation; `page` must be in range.
pub(crate) fn transition_row(corpus: &Corpus, page: PageId, damping: f64) -> Distribution {
    let n = corpus.page_count();
    let links = corpus.successors(page);

    if links.is_empty() {
        return Distribution::uniform(n);
    }

    let mut row = Distribution::from_vec(vec![(1.0 - damping) / n as f64; n]);
    let follow = damping / links.len() as f64;
    let values = row.values_mut();
    for &target in links {
        values[target] += follow;
    }
    row
}

/// Cumulative-weight sampler over one transition row
pub(crate) fn row_sampler(row: &Distribution) -> RankResult<WeightedIndex<f64>> {
    WeightedIndex::new(row.values().iter().copied()).map_err(|e| RankError::Sampling(e.to_string()))
}

/// Every transition row of a corpus, with a weighted sampler per row.
///
/// Rows are built once, in parallel, which costs O(N²) memory; suited to
/// repeated draws over a small corpus. The samplers use cumulative weights with
/// a binary search per draw.
pub struct TransitionModel {
    damping: f64,
    rows: Vec<Distribution>,
    samplers: Vec<WeightedIndex<f64>>,
}

impl TransitionModel {
    pub fn build(corpus: &Corpus, damping: f64) -> RankResult<Self> {
        check_damping(damping)?;
        if corpus.is_empty() {
            return Err(RankError::EmptyCorpus);
        }

        let rows: Vec<Distribution> = (0..corpus.page_count())
            .into_par_iter()
            .map(|page| transition_row(corpus, page, damping))
            .collect();

        let samplers = rows.iter().map(row_sampler).collect::<RankResult<Vec<_>>>()?;

        Ok(Self {
            damping,
            rows,
            samplers,
        })
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    pub fn page_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, page: PageId) -> Option<&Distribution> {
        self.rows.get(page)
    }

    /// Draw the page that follows `page`, weighted by its transition row.
    pub fn sample_next<R: Rng + ?Sized>(&self, page: PageId, rng: &mut R) -> PageId {
        self.samplers[page].sample(rng)
    }
}
