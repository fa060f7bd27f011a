//! Array-backed probability distributions over corpus pages

use super::common::{Corpus, PageId};
use ndarray::Array1;
use std::collections::BTreeMap;

/// One non-negative weight per page, indexed by [`PageId`].
///
/// Returned results sum to 1.0 up to floating-point rounding; the estimators
/// also use it as a mutable accumulator while they run.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    values: Array1<f64>,
}

impl Distribution {
    /// Every page at zero
    pub fn zeros(page_count: usize) -> Self {
        Self {
            values: Array1::zeros(page_count),
        }
    }

    /// Every page at `1 / page_count`
    pub fn uniform(page_count: usize) -> Self {
        Self {
            values: Array1::from_elem(page_count, 1.0 / page_count as f64),
        }
    }

    pub fn from_vec(values: Vec<f64>) -> Self {
        Self {
            values: Array1::from_vec(values),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, page: PageId) -> Option<f64> {
        self.values.get(page).copied()
    }

    pub fn sum(&self) -> f64 {
        self.values.sum()
    }

    pub fn as_slice(&self) -> &[f64] {
        // Array1 built by this type is always contiguous
        self.values.as_slice().unwrap_or(&[])
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut Array1<f64> {
        &mut self.values
    }

    /// Largest per-page absolute difference to `other`
    pub fn max_abs_diff(&self, other: &Distribution) -> f64 {
        self.values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    /// Iterate `(page identifier, value)` in page order
    pub fn named<'a>(&'a self, corpus: &'a Corpus) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        corpus
            .page_names()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Map page identifiers to values, sorted by identifier
    pub fn to_map(&self, corpus: &Corpus) -> BTreeMap<String, f64> {
        self.named(corpus)
            .map(|(page, value)| (page.to_string(), value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_and_zeros() {
        let uniform = Distribution::uniform(4);
        assert_eq!(uniform.len(), 4);
        assert!((uniform.sum() - 1.0).abs() < 1e-12);
        assert_eq!(uniform.get(3), Some(0.25));
        assert_eq!(uniform.get(4), None);

        let zeros = Distribution::zeros(3);
        assert_eq!(zeros.as_slice(), &[0.0, 0.0, 0.0]);
        assert_eq!(zeros.sum(), 0.0);
    }

    #[test]
    fn test_max_abs_diff() {
        let a = Distribution::from_vec(vec![0.2, 0.5, 0.3]);
        let b = Distribution::from_vec(vec![0.25, 0.4, 0.35]);
        assert!((a.max_abs_diff(&b) - 0.1).abs() < 1e-12);
        assert_eq!(a.max_abs_diff(&a), 0.0);
    }

    #[test]
    fn test_named_follows_page_order() {
        let corpus = Corpus::from_links(vec![("b", vec!["a"]), ("a", vec!["b"])]);
        let dist = Distribution::from_vec(vec![0.4, 0.6]);

        let named: Vec<(&str, f64)> = dist.named(&corpus).collect();
        assert_eq!(named, vec![("a", 0.4), ("b", 0.6)]);

        let map = dist.to_map(&corpus);
        assert_eq!(map.get("b"), Some(&0.6));
    }
}
