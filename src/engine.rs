use std::cmp::Ordering;
use std::time::Instant;

use tracing::{Level, debug, trace, warn};

use crate::config::RankConfig;
use crate::error::{ConfigError, RankError};
use crate::metrics::MetricsSpan;
use crate::similarity::{cosine_with_magnitude, magnitude};
use crate::types::{ResultSet, SimilarityResult};


/// Rank `candidates` by cosine similarity to `reference` and keep the best `top_n`.
///
/// The result is sorted by similarity, highest first, and holds
/// `min(top_n, candidates.len())` entries. Equal similarities keep their
/// input order. NaN similarities (zero-magnitude vectors) sort after every
/// other value.
///
/// Fails with [`RankError::DimensionMismatch`] on the first candidate whose
/// length differs from the reference. Nothing is returned in that case.
pub fn rank<'a, C>(
    reference: &[f64],
    candidates: &'a [C],
    top_n: usize,
) -> Result<ResultSet<'a>, RankError>
where
    C: AsRef<[f64]>,
{
    run_ranked(reference, candidates, top_n, None)
}

/// A ranker bound to a validated [`RankConfig`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranker {
    config: RankConfig,
}

impl Ranker {
    /// Validate `config` and build a ranker from it.
    pub fn new(config: RankConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Rank with the configured `top_n` and similarity floor.
    ///
    /// The floor is applied before truncation, so `top_n` counts only results
    /// that cleared it.
    pub fn rank<'a, C>(
        &self,
        reference: &[f64],
        candidates: &'a [C],
    ) -> Result<ResultSet<'a>, RankError>
    where
        C: AsRef<[f64]>,
    {
        run_ranked(
            reference,
            candidates,
            self.config.top_n,
            self.config.min_similarity,
        )
    }
}

fn run_ranked<'a, C>(
    reference: &[f64],
    candidates: &'a [C],
    top_n: usize,
    min_similarity: Option<f64>,
) -> Result<ResultSet<'a>, RankError>
where
    C: AsRef<[f64]>,
{
    let start = Instant::now();
    let metrics = MetricsSpan::start();
    let span = tracing::span!(
        Level::DEBUG,
        "cosine_rank.rank",
        candidates = candidates.len(),
        dimensions = reference.len(),
        top_n
    );
    let _guard = span.enter();

    match rank_inner(reference, candidates, top_n, min_similarity) {
        Ok(results) => {
            let elapsed_micros = start.elapsed().as_micros();
            debug!(returned = results.len(), elapsed_micros, "rank_success");
            if let Some(recorder) = metrics {
                recorder.finish(candidates.len(), Ok(results.len()));
            }
            Ok(results)
        }
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            let RankError::DimensionMismatch {
                index,
                expected,
                actual,
            } = err;
            warn!(
                error = %err,
                index,
                expected,
                actual,
                elapsed_micros,
                "rank_failure"
            );
            if let Some(recorder) = metrics {
                recorder.finish(candidates.len(), Err(&err));
            }
            Err(err)
        }
    }
}

fn rank_inner<'a, C>(
    reference: &[f64],
    candidates: &'a [C],
    top_n: usize,
    min_similarity: Option<f64>,
) -> Result<ResultSet<'a>, RankError>
where
    C: AsRef<[f64]>,
{
    let reference_magnitude = magnitude(reference);

    let mut results = Vec::with_capacity(candidates.len());
    for (index, candidate) in candidates.iter().enumerate() {
        let vector = candidate.as_ref();
        if vector.len() != reference.len() {
            return Err(RankError::DimensionMismatch {
                index,
                expected: reference.len(),
                actual: vector.len(),
            });
        }

        let similarity = cosine_with_magnitude(reference, reference_magnitude, vector);
        if !similarity.is_finite() {
            trace!(index, similarity, "non_finite_similarity");
        }
        results.push(SimilarityResult {
            vector,
            index,
            similarity,
        });
    }

    // `sort_by` is stable, so ties keep their input order.
    results.sort_by(|a, b| descending(a.similarity, b.similarity));

    if let Some(floor) = min_similarity {
        // NaN fails every comparison and is dropped here.
        results.retain(|r| r.similarity >= floor);
    }
    results.truncate(top_n);
    Ok(results)
}

/// Descending order with NaN placed after every other value.
fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
