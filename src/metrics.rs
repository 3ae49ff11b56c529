// Metrics hooks for ranking.
//
// Callers install a global `RankMetrics` implementation via [`set_rank_metrics`],
// then every call to [`rank`](crate::rank) or [`Ranker::rank`](crate::Ranker::rank)
// reports its latency and outcome once.
use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

use crate::error::RankError;

/// Metrics observer for rank operations.
pub trait RankMetrics: Send + Sync {
    /// Record the outcome of one rank call.
    ///
    /// `candidates` is the size of the input set, `latency` the wall-clock
    /// duration of the call, and `outcome` either the number of results
    /// returned or the error that aborted the call.
    fn record_rank(&self, candidates: usize, latency: Duration, outcome: Result<usize, &RankError>);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn RankMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn RankMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn RankMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global rank metrics recorder.
pub fn set_rank_metrics(recorder: Option<Arc<dyn RankMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

/// Timing handle that exists only while a recorder is installed.
pub(crate) struct MetricsSpan {
    recorder: Arc<dyn RankMetrics>,
    start: Instant,
}

impl MetricsSpan {
    pub(crate) fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    pub(crate) fn finish(self, candidates: usize, outcome: Result<usize, &RankError>) {
        self.recorder
            .record_rank(candidates, self.start.elapsed(), outcome);
    }
}
