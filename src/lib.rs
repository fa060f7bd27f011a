//! Linkrank
//!
//! Ranks the pages of a directory of hyperlinked HTML documents with PageRank,
//! estimated two independent ways:
//!
//! - **Sampling**: a seeded random surfer walks the corpus, averaging the
//!   transition distribution of every page it passes through.
//! - **Iteration**: synchronous fixed-point sweeps of the PageRank equation
//!   until every page changes by no more than `0.001`.
//!
//! The algorithms live in the `linkrank-algorithms` crate. This crate loads the
//! corpus from disk ([`crawl`]) and shapes results for output ([`RankReport`]).
//!
//! ## Example Usage
//!
//! ```rust
//! use linkrank::{iterate_rank, Corpus};
//!
//! let corpus = Corpus::from_links(vec![
//!     ("1.html", vec!["2.html"]),
//!     ("2.html", vec!["1.html"]),
//! ]);
//!
//! let ranks = iterate_rank(&corpus, 0.85).unwrap();
//! assert!((ranks.sum() - 1.0).abs() < 1e-3);
//! ```

pub mod error;
pub mod loader;
pub mod report;

pub use error::{LinkRankError, LinkRankResult};
pub use loader::{crawl, extract_links};
pub use report::{MethodReport, RankReport};

// Re-export algorithms
pub use linkrank_algorithms::{
    iterate_page_rank, iterate_rank, link_sum, sample_page_rank, sample_rank, transition,
    transition_by_name, Corpus, Distribution, IterationOutcome, PageId, PageRankConfig,
    RankError, RankResult, SamplingConfig, TransitionModel,
};

/// Damping factor used when none is given
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Random-walk length used when none is given
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
