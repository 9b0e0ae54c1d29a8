//! Ingestion error types

use super::backend::BackendError;
use super::types::FailureKind;
use thiserror::Error;

/// Reasons a batch is rejected before any write is attempted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The batch holds more orders than allowed
    #[error("batch has {count} records, maximum is {max}")]
    BatchTooLarge { count: usize, max: usize },

    /// An order is missing or violates a required field
    #[error("record at index {index} is malformed: {reason}")]
    MalformedBatch { index: usize, reason: String },
}

impl ValidationError {
    /// Machine-readable rejection code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::BatchTooLarge { .. } => "too_many_records",
            ValidationError::MalformedBatch { .. } => "invalid_payload",
        }
    }
}

/// Per-order persistence failure
///
/// Always names the batch index of the order it belongs to; never aborts the
/// rest of the batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("record {index}: {source}")]
    Backend {
        index: usize,
        #[source]
        source: BackendError,
    },

    #[error("record {index}: deadline expired before the write was started")]
    Timeout { index: usize },

    #[error("record {index}: worker terminated before reporting an outcome")]
    WorkerAborted { index: usize },
}

impl PersistenceError {
    /// Batch index of the affected order
    pub fn index(&self) -> usize {
        match self {
            PersistenceError::Backend { index, .. }
            | PersistenceError::Timeout { index }
            | PersistenceError::WorkerAborted { index } => *index,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            PersistenceError::Backend { .. } => FailureKind::Backend,
            PersistenceError::Timeout { .. } => FailureKind::Timeout,
            PersistenceError::WorkerAborted { .. } => FailureKind::WorkerAborted,
        }
    }
}
