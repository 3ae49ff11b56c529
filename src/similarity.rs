//! Vector math used by the ranker.
//!
//! Everything here follows plain IEEE-754 double-precision semantics. A zero
//! magnitude is never special-cased: `0 / 0` yields NaN and `x / 0` yields
//! ±Infinity, and those values flow through to the caller.

use crate::error::RankError;

/// Dot product of two equal-length vectors.
///
/// Lengths are not checked here; the shorter slice bounds the sum.
#[inline]
pub(crate) fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(&x, &y)| x * y).sum()
}

/// Euclidean norm, `sqrt(sum of squares)`.
///
/// Squares are summed directly, so very large components overflow to
/// Infinity.
#[inline]
pub fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|&x| x * x).sum::<f64>().sqrt()
}

/// Cosine similarity of `a` and `b`.
///
/// Fails with [`RankError::DimensionMismatch`] (index `0`) when the lengths
/// differ.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64, RankError> {
    if a.len() != b.len() {
        return Err(RankError::DimensionMismatch {
            index: 0,
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(cosine_with_magnitude(a, magnitude(a), b))
}

/// Cosine similarity against a reference whose magnitude is already known.
///
/// Used by the ranker so the reference norm is computed once per call.
/// Callers must have checked that the lengths match.
#[inline]
pub(crate) fn cosine_with_magnitude(
    reference: &[f64],
    reference_magnitude: f64,
    candidate: &[f64],
) -> f64 {
    debug_assert_eq!(reference.len(), candidate.len());
    dot(reference, candidate) / (reference_magnitude * magnitude(candidate))
}
