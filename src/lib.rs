//! # Cosine Rank (`cosine_rank`)
//!
//! ## Purpose
//!
//! `cosine_rank` scores a collection of candidate vectors against a single
//! reference vector by cosine similarity and returns the best N, highest
//! similarity first. It is a pure computation: no state survives a call, there
//! is no I/O, and nothing runs in the background.
//!
//! ## Core Types
//!
//! - [`rank`]: the one-shot entry point, `(reference, candidates, top_n)`.
//! - [`Ranker`]: a ranker bound to a validated [`RankConfig`], adding an
//!   optional similarity floor.
//! - [`SimilarityResult`]: a borrowed candidate, its input position, and its
//!   similarity.
//! - [`RankError`]: the single failure mode, a dimension mismatch.
//!
//! ## Numeric behavior
//!
//! All math is IEEE-754 `f64`. A zero-magnitude reference or candidate yields
//! NaN (or ±Infinity) instead of an error. Such results are kept and NaN
//! sorts after every other value, so callers that threshold or sort
//! downstream must expect non-finite similarities.
//!
//! Magnitudes use the plain `sqrt(sum of squares)` formula without rescaling.
//! Components large enough for their squares to overflow (around `1e154` and
//! up) push the magnitude to Infinity, and the similarity becomes NaN even
//! for identical vectors.
//!
//! ## Example Usage
//!
//! ```
//! use cosine_rank::rank;
//!
//! let reference = [1.0, 2.0, 3.0];
//! let candidates = vec![
//!     vec![1.0, 2.0, 3.0],
//!     vec![0.0, 1.0, 0.0],
//!     vec![0.0, 0.0, 1.0],
//!     vec![1.0, 1.0, 1.0],
//! ];
//!
//! let top = rank(&reference, &candidates, 2).expect("matching dimensions");
//! assert_eq!(top.len(), 2);
//! assert!((top[0].similarity - 1.0).abs() < 1e-9);
//! assert_eq!(top[1].vector, &[1.0, 1.0, 1.0]);
//! ```
//!
//! ## Observability
//!
//! Each call opens a DEBUG-level `tracing` span and logs `rank_success` or
//! `rank_failure`. Install a [`RankMetrics`] implementation via
//! [`set_rank_metrics`] to record per-call latency and result counts.

mod config;
mod engine;
mod error;
mod metrics;
mod similarity;
mod types;

pub use crate::config::{RANK_CONFIG_VERSION, RankConfig};
pub use crate::engine::{Ranker, rank};
pub use crate::error::{ConfigError, RankError};
pub use crate::metrics::{RankMetrics, set_rank_metrics};
pub use crate::similarity::{cosine_similarity, magnitude};
pub use crate::types::{ResultSet, SimilarityResult};
