//! Error types produced by the ranking crate.
//!
//! Ranking has exactly one failure mode, [`RankError::DimensionMismatch`].
//! Numerically odd inputs (zero-magnitude vectors, NaN entries) are not
//! errors: they surface as non-finite similarity values in the result set.
//!
//! Configuration problems are reported separately through [`ConfigError`] so
//! that a successful [`Ranker::new`](crate::Ranker::new) guarantees every
//! later failure is a `RankError`.

use thiserror::Error;

/// Errors surfaced by [`rank`](crate::rank) and friends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// A candidate's length differs from the reference's length.
    ///
    /// `index` is the position of the first offending candidate in the input
    /// set; the scan stops there and no partial result is returned.
    #[error("Vectors must have the same dimensions")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },
}

/// Errors raised while validating or loading a [`RankConfig`](crate::RankConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unsupported rank config version: {0}")]
    UnsupportedVersion(u32),

    #[error("min_similarity must be finite and within [-1, 1], got {0}")]
    InvalidMinSimilarity(f64),

    #[error("failed to parse rank config: {0}")]
    Parse(#[from] serde_json::Error),
}
