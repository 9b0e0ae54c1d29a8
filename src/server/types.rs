//! Request and response bodies

use crate::core::ingest::{CorrelationId, Failure, Order, Report};
use serde::{Deserialize, Serialize};

/// Body of `POST /orders`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngestRequest {
    /// Correlation id shared by every order in the batch
    pub request_id: CorrelationId,
    /// Orders to persist
    #[serde(default)]
    pub data: Vec<Order>,
}

/// Body returned for an ingested batch
#[derive(Debug, Clone, Serialize)]
pub struct IngestResponse {
    /// Whether every order was written
    pub success: bool,
    /// Time spent persisting, in milliseconds
    pub time_ms: u64,
    pub total: usize,
    pub success_count: usize,
    pub failures: Vec<Failure>,
}

impl From<Report> for IngestResponse {
    fn from(report: Report) -> Self {
        Self {
            success: report.is_complete_success(),
            time_ms: report.elapsed_ms(),
            total: report.total,
            success_count: report.success_count,
            failures: report.failures,
        }
    }
}

/// Build information returned by `GET /version`
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_time: &'static str,
    pub git_hash: &'static str,
}

impl VersionInfo {
    pub fn current() -> Self {
        let build = crate::build_info();
        Self {
            name: crate::NAME,
            version: build.version,
            build_time: build.build_time,
            git_hash: build.git_hash,
        }
    }
}
