//! Custom test assertions
//!
//! Provides report-level assertions for ingestion tests.

use order_ingest::core::ingest::{FailureKind, Report};

/// Assertions for ingestion reports
pub trait ReportAssertions {
    /// Assert every record is accounted for exactly once
    fn assert_accounts_for(&self, len: usize);

    /// Assert the failed indices, in order
    fn assert_failed_indices(&self, expected: &[usize]);

    /// Assert every failure has the given kind
    fn assert_all_failures(&self, kind: FailureKind);
}

impl ReportAssertions for Report {
    fn assert_accounts_for(&self, len: usize) {
        assert_eq!(self.total, len, "report total does not match batch size");
        assert_eq!(
            self.success_count + self.failures.len(),
            len,
            "successes ({}) plus failures ({}) do not cover the batch ({})",
            self.success_count,
            self.failures.len(),
            len
        );
    }

    fn assert_failed_indices(&self, expected: &[usize]) {
        let actual: Vec<usize> = self.failures.iter().map(|f| f.index).collect();
        assert_eq!(actual, expected, "unexpected failed indices");
    }

    fn assert_all_failures(&self, kind: FailureKind) {
        for failure in &self.failures {
            assert_eq!(
                failure.kind, kind,
                "failure at index {} has kind {:?}",
                failure.index, failure.kind
            );
        }
    }
}
