//! Ranking results shaped for output

use linkrank_algorithms::{Corpus, Distribution};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Results of one estimator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodReport {
    /// "sampling" or "iteration"
    pub method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<usize>,
    /// Page identifier -> rank, sorted by identifier
    pub ranks: BTreeMap<String, f64>,
}

impl MethodReport {
    pub fn sampling(corpus: &Corpus, ranks: &Distribution, samples: usize) -> Self {
        Self {
            method: "sampling",
            samples: Some(samples),
            iterations: None,
            ranks: ranks.to_map(corpus),
        }
    }

    pub fn iteration(corpus: &Corpus, ranks: &Distribution, iterations: usize) -> Self {
        Self {
            method: "iteration",
            samples: None,
            iterations: Some(iterations),
            ranks: ranks.to_map(corpus),
        }
    }

    /// Header line naming the method
    pub fn title(&self) -> String {
        match self.samples {
            Some(n) => format!("PageRank Results from Sampling (n = {})", n),
            None => "PageRank Results from Iteration".to_string(),
        }
    }
}

impl fmt::Display for MethodReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title())?;
        for (page, rank) in &self.ranks {
            writeln!(f, "  {}: {:.4}", page, rank)?;
        }
        Ok(())
    }
}

/// Everything one run produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankReport {
    pub damping_factor: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampling: Option<MethodReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration: Option<MethodReport>,
}

impl RankReport {
    pub fn new(damping_factor: f64) -> Self {
        Self {
            damping_factor,
            sampling: None,
            iteration: None,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Method reports in output order: sampling first
    pub fn methods(&self) -> impl Iterator<Item = &MethodReport> {
        self.sampling.iter().chain(self.iteration.iter())
    }
}

impl fmt::Display for RankReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for method in self.methods() {
            write!(f, "{}", method)?;
        }
        Ok(())
    }
}
