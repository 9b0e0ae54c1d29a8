//! Batch ingestion configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Limits applied to every ingested batch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngestConfig {
    /// Maximum number of orders per batch
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
    /// Concurrent writers per batch; defaults to the database pool size
    #[serde(default)]
    pub max_workers: Option<usize>,
    /// Overall per-batch deadline in milliseconds
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            max_batch_size: default_max_batch_size(),
            max_workers: None,
            timeout_ms: None,
        }
    }
}

impl IngestConfig {
    /// Merge ingest configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.max_batch_size != default_max_batch_size() {
            self.max_batch_size = other.max_batch_size;
        }
        if other.max_workers.is_some() {
            self.max_workers = other.max_workers;
        }
        if other.timeout_ms.is_some() {
            self.timeout_ms = other.timeout_ms;
        }
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}
