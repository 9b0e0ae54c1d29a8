//! Storage seam used by the ingestion core

use super::types::Order;
use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a persistence backend for a single write
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The store refused the row (unique key, foreign key, check)
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// No connection could be obtained or the connection dropped
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Anything else the store reported
    #[error("store error: {0}")]
    Other(String),
}

/// Durable store for orders
///
/// Implementations own their connection pool; the ingestion core only calls
/// `create` and never retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersistenceBackend: Send + Sync {
    /// Write one order and return the id the store assigned to it
    async fn create(&self, order: &Order) -> Result<i64, BackendError>;

    /// Check that the store is reachable
    async fn health_check(&self) -> Result<(), BackendError> {
        Ok(())
    }
}
