//! Error types for the ranking algorithms

use thiserror::Error;

/// Errors raised at the boundary of the ranking functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankError {
    /// The corpus has no pages, so there is nothing to rank or start from
    #[error("empty corpus: at least one page is required")]
    EmptyCorpus,

    /// A page identifier (or index) that is not part of the corpus
    #[error("unknown page: {0}")]
    UnknownPage(String),

    /// Damping factor outside the open interval (0, 1)
    #[error("invalid damping factor {0}: must be strictly between 0 and 1")]
    InvalidDamping(f64),

    /// Sampling needs at least one sample
    #[error("invalid sample count {0}: must be at least 1")]
    InvalidSampleCount(usize),

    /// Convergence threshold must be a positive finite number
    #[error("invalid tolerance {0}: must be positive and finite")]
    InvalidTolerance(f64),

    /// Iteration hit its cap before every page was stable
    #[error("iteration did not converge after {iterations} sweeps")]
    NotConverged { iterations: usize },

    /// A transition row could not be turned into a weighted sampler
    #[error("sampling error: {0}")]
    Sampling(String),
}

pub type RankResult<T> = Result<T, RankError>;

/// Reject damping factors outside (0, 1), NaN included.
pub(crate) fn check_damping(damping: f64) -> RankResult<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(RankError::InvalidDamping(damping))
    }
}
