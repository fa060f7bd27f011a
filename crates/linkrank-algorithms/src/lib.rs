//! PageRank estimators for a closed hyperlink corpus
//!
//! Two independent estimators share one [`Corpus`] view:
//! - [`sample_rank`]: a seeded random walk over the [`transition`] model
//! - [`iterate_rank`]: Jacobi fixed-point iteration

pub mod common;
pub mod distribution;
pub mod error;
pub mod iteration;
pub mod sampling;
pub mod transition;

pub use common::{Corpus, PageId};
pub use distribution::Distribution;
pub use error::{RankError, RankResult};
pub use iteration::{iterate_page_rank, iterate_rank, link_sum, IterationOutcome, PageRankConfig};
pub use sampling::{sample_page_rank, sample_rank, SamplingConfig};
pub use transition::{transition, transition_by_name, TransitionModel};
