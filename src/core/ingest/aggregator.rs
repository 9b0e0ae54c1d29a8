//! Reduction of per-order outcomes into a report

use super::types::{Failure, Outcome, OutcomeSet, Report};
use tokio::time::Instant;

pub struct ResultAggregator;

impl ResultAggregator {
    /// Build the report for a finished batch
    ///
    /// Failures are listed in batch index order. `elapsed` is measured on a
    /// monotonic clock from `started`.
    pub fn aggregate(outcomes: OutcomeSet, started: Instant) -> Report {
        let total = outcomes.len();
        let mut success_count = 0;
        let mut failures = Vec::new();

        let mut entries = outcomes.into_entries();
        entries.sort_by_key(|entry| entry.index);

        for entry in entries {
            match &entry.outcome {
                Outcome::Written { .. } => success_count += 1,
                Outcome::Failed(error) => {
                    failures.push(Failure::new(entry.index, entry.record, error));
                }
            }
        }

        Report {
            total,
            success_count,
            failures,
            elapsed: started.elapsed(),
        }
    }
}
