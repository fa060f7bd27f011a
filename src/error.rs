//! Error types for linkrank

use linkrank_algorithms::RankError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a corpus or ranking it
#[derive(Error, Debug)]
pub enum LinkRankError {
    /// I/O error while reading the corpus directory
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Link pattern failed to compile
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Ranking failed
    #[error("Ranking error: {0}")]
    Rank(#[from] RankError),

    /// The directory holds no `.html` pages
    #[error("Empty corpus: no .html pages found in {}", .0.display())]
    EmptyCorpus(PathBuf),

    /// The corpus path is missing or not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

pub type LinkRankResult<T> = Result<T, LinkRankError>;
