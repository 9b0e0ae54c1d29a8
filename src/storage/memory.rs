//! In-process order store
//!
//! Used when the database is disabled, and by tests and benchmarks.

use crate::core::ingest::{BackendError, CorrelationId, Order, PersistenceBackend};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Orders kept in memory with sequential ids starting at 1
#[derive(Debug, Default)]
pub struct MemoryBackend {
    rows: RwLock<Vec<Order>>,
    next_id: AtomicI64,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored orders
    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    /// Count orders written under one correlation id
    pub fn count_by_request(&self, request_id: CorrelationId) -> usize {
        self.rows
            .read()
            .iter()
            .filter(|o| o.request_id == Some(request_id))
            .count()
    }

    /// Snapshot of all stored orders in insertion order
    pub fn orders(&self) -> Vec<Order> {
        self.rows.read().clone()
    }
}

#[async_trait]
impl PersistenceBackend for MemoryBackend {
    async fn create(&self, order: &Order) -> Result<i64, BackendError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let mut stored = order.clone();
        stored.id = Some(id);
        self.rows.write().push(stored);
        Ok(id)
    }
}
