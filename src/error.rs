use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the similarity engine and the corpus loader.
#[derive(Debug, Error)]
pub enum SimilarityError {
    /// Invalid analysis configuration.
    #[error("invalid analysis config: {0}")]
    InvalidConfig(String),
    /// The corpus has fewer than two documents, so no pair can be scored.
    #[error("corpus must contain at least two documents (got {0})")]
    EmptyCorpus(usize),
    /// Reading a corpus file or directory failed.
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
