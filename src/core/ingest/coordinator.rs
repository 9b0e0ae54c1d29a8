//! Entry point of the ingestion core

use super::aggregator::ResultAggregator;
use super::backend::PersistenceBackend;
use super::error::ValidationError;
use super::persister::ConcurrentPersister;
use super::stamper::RecordStamper;
use super::types::{CorrelationId, Order, Report};
use super::validator::BatchValidator;
use crate::config::IngestConfig;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Stages a batch moves through during one `ingest` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestStage {
    Validating,
    Stamping,
    Persisting,
    Aggregating,
    /// Validation failed, nothing was written
    Rejected,
    /// A report was produced; writes are already applied
    Completed,
}

impl fmt::Display for IngestStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IngestStage::Validating => "validating",
            IngestStage::Stamping => "stamping",
            IngestStage::Persisting => "persisting",
            IngestStage::Aggregating => "aggregating",
            IngestStage::Rejected => "rejected",
            IngestStage::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// Validates, stamps, persists and aggregates one batch at a time
///
/// Holds no per-batch state, so a single instance is shared by all
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct BatchIngestCoordinator {
    validator: BatchValidator,
    persister: ConcurrentPersister,
    timeout: Option<Duration>,
}

impl BatchIngestCoordinator {
    pub fn new(
        validator: BatchValidator,
        persister: ConcurrentPersister,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            validator,
            persister,
            timeout,
        }
    }

    /// Build from configuration; `pool_size` is the worker ceiling when
    /// `max_workers` is not configured.
    pub fn from_config(config: &IngestConfig, pool_size: usize) -> Self {
        Self::new(
            BatchValidator::new(config.max_batch_size),
            ConcurrentPersister::new(config.max_workers.unwrap_or(pool_size)),
            config.timeout(),
        )
    }

    pub fn validator(&self) -> &BatchValidator {
        &self.validator
    }

    pub fn persister(&self) -> &ConcurrentPersister {
        &self.persister
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Ingest one batch
    ///
    /// Returns `Err` only when the batch is rejected, in which case the
    /// backend was never called. Individual write failures are reported in
    /// the returned [`Report`].
    pub async fn ingest(
        &self,
        batch: Vec<Order>,
        correlation_id: CorrelationId,
        backend: Arc<dyn PersistenceBackend>,
    ) -> Result<Report, ValidationError> {
        let mut stage = IngestStage::Validating;
        debug!(request_id = %correlation_id, records = batch.len(), %stage, "Ingest started");

        if let Err(e) = self.validator.validate(&batch) {
            stage = IngestStage::Rejected;
            warn!(request_id = %correlation_id, code = e.code(), %stage, "Batch rejected: {}", e);
            return Err(e);
        }

        let started = Instant::now();
        let deadline = self.timeout.map(|timeout| started + timeout);

        stage = IngestStage::Stamping;
        debug!(request_id = %correlation_id, %stage, "Stamping batch");
        let stamped = RecordStamper::stamp(batch, correlation_id);

        stage = IngestStage::Persisting;
        debug!(request_id = %correlation_id, %stage, "Persisting batch");
        let outcomes = self.persister.persist(stamped, backend, deadline).await;

        stage = IngestStage::Aggregating;
        debug!(request_id = %correlation_id, %stage, "Aggregating outcomes");
        let report = ResultAggregator::aggregate(outcomes, started);

        stage = IngestStage::Completed;
        info!(
            request_id = %correlation_id,
            total = report.total,
            written = report.success_count,
            failed = report.failure_count(),
            elapsed_ms = report.elapsed_ms(),
            %stage,
            "Batch ingested"
        );

        Ok(report)
    }
}
