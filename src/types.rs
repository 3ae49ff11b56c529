use serde::Serialize;

/// One scored candidate.
///
/// `vector` borrows the caller's candidate; nothing is copied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityResult<'a> {
    /// The original candidate vector.
    pub vector: &'a [f64],
    /// Position of the candidate in the input set.
    pub index: usize,
    /// Cosine similarity against the reference. May be NaN or ±Infinity
    /// when either vector has zero magnitude.
    pub similarity: f64,
}

/// Ranked results, highest similarity first.
pub type ResultSet<'a> = Vec<SimilarityResult<'a>>;
