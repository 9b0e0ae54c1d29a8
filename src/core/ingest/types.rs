//! Ingestion types and data structures

use super::error::PersistenceError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Identifier shared by every order of one ingestion request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrelationId(pub u32);

impl CorrelationId {
    /// Raw numeric value
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for CorrelationId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single order submitted for persistence
///
/// `id` is assigned by the store and `request_id` by the batch, so neither is
/// read from the caller's payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Store-assigned identity
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Correlation id of the batch this order belongs to
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<CorrelationId>,
    /// Customer name
    #[serde(default)]
    pub customer: String,
    /// Ordered quantity
    #[serde(default)]
    pub quantity: u32,
    /// Unit price
    #[serde(default)]
    pub price: f64,
    /// Creation time, defaulted to submission time when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Create an unstamped order
    pub fn new(customer: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self {
            id: None,
            request_id: None,
            customer: customer.into(),
            quantity,
            price,
            created_at: None,
        }
    }

    /// Set an explicit creation time
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// Result of persisting one order
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The store accepted the order and assigned it an id
    Written { id: i64 },
    /// The order was not persisted
    Failed(PersistenceError),
}

impl Outcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Outcome::Written { .. })
    }
}

/// One order together with its outcome and batch position
#[derive(Debug, Clone, PartialEq)]
pub struct RecordOutcome {
    /// Zero-based position in the submitted batch
    pub index: usize,
    /// The stamped order as it was sent to the store
    pub record: Order,
    /// What happened to it
    pub outcome: Outcome,
}

/// Per-order outcomes of one batch, in batch index order
///
/// Holds exactly one entry per submitted order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutcomeSet {
    pub(super) entries: Vec<RecordOutcome>,
}

impl OutcomeSet {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordOutcome> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<RecordOutcome> {
        self.entries
    }
}

/// Category of a per-order failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The store rejected or failed the write
    Backend,
    /// The batch deadline passed before the order was attempted
    Timeout,
    /// The worker handling the order terminated before reporting
    WorkerAborted,
}

/// A failed order in the final report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Failure {
    /// Zero-based position in the submitted batch
    pub index: usize,
    /// The order that failed
    pub record: Order,
    /// Failure category
    pub kind: FailureKind,
    /// Human-readable reason
    pub reason: String,
}

impl Failure {
    pub(super) fn new(index: usize, record: Order, error: &PersistenceError) -> Self {
        Self {
            index,
            record,
            kind: error.kind(),
            reason: error.to_string(),
        }
    }
}

/// Aggregated result of one batch ingestion
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Number of orders attempted
    pub total: usize,
    /// Number of orders written
    pub success_count: usize,
    /// Failed orders in ascending batch index order
    pub failures: Vec<Failure>,
    /// Wall-clock time spent persisting the batch
    pub elapsed: Duration,
}

impl Report {
    /// Whether every order was written
    pub fn is_complete_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Elapsed time in whole milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}
