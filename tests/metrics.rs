use std::sync::{Arc, RwLock};
use std::time::Duration;

use cosine_rank::{RankConfig, RankError, RankMetrics, Ranker, rank, set_rank_metrics};

#[derive(Default)]
struct CountingMetrics {
    events: RwLock<Vec<(usize, Result<usize, RankError>)>>,
}

impl CountingMetrics {
    fn snapshot(&self) -> Vec<(usize, Result<usize, RankError>)> {
        self.events.read().unwrap().clone()
    }
}

impl RankMetrics for CountingMetrics {
    fn record_rank(
        &self,
        candidates: usize,
        _latency: Duration,
        outcome: Result<usize, &RankError>,
    ) {
        self.events
            .write()
            .unwrap()
            .push((candidates, outcome.map_err(|err| err.clone())));
    }
}

// One test only: the recorder is process-global.
#[test]
fn recorder_sees_one_event_per_call() {
    let metrics = Arc::new(CountingMetrics::default());
    set_rank_metrics(Some(metrics.clone()));

    let candidates = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]];
    rank(&[1.0, 0.0], &candidates, 2).expect("rank");

    let ranker = Ranker::new(RankConfig::new().with_top_n(5)).expect("valid config");
    ranker.rank(&[1.0, 0.0], &candidates).expect("ranker");

    let bad = vec![vec![1.0, 0.0], vec![1.0]];
    rank(&[1.0, 0.0], &bad, 2).expect_err("dimension mismatch");

    set_rank_metrics(None);
    rank(&[1.0, 0.0], &candidates, 1).expect("rank without recorder");

    let events = metrics.snapshot();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0], (3, Ok(2)));
    assert_eq!(events[1], (3, Ok(3)));
    assert_eq!(
        events[2],
        (
            2,
            Err(RankError::DimensionMismatch {
                index: 1,
                expected: 2,
                actual: 1
            })
        )
    );
}
