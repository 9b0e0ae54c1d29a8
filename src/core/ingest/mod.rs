//! Concurrent batch ingestion
//!
//! This module turns one submitted batch of orders into persisted rows and a
//! report:
//! - `validator`: batch size and per-order field checks
//! - `stamper`: correlation id and default creation time
//! - `persister`: bounded worker pool writing through a [`PersistenceBackend`]
//! - `aggregator`: outcome counting and failure ordering
//! - `coordinator`: the sequence above behind a single `ingest` call

mod aggregator;
mod backend;
mod coordinator;
mod error;
mod persister;
mod stamper;
mod types;
mod validator;


pub use aggregator::ResultAggregator;
pub use backend::{BackendError, PersistenceBackend};
#[cfg(test)]
pub use backend::MockPersistenceBackend;
pub use coordinator::{BatchIngestCoordinator, IngestStage};
pub use error::{PersistenceError, ValidationError};
pub use persister::ConcurrentPersister;
pub use stamper::RecordStamper;
pub use types::{
    CorrelationId, Failure, FailureKind, Order, Outcome, OutcomeSet, RecordOutcome, Report,
};
pub use validator::{BatchValidator, DEFAULT_MAX_BATCH_SIZE, MAX_CUSTOMER_LEN};
