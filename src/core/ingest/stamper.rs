//! Request-scoped stamping of orders

use super::types::{CorrelationId, Order};
use chrono::{DateTime, Utc};

/// Applies batch metadata to every order
pub struct RecordStamper;

impl RecordStamper {
    /// Stamp with the current time as the submission time
    pub fn stamp(batch: Vec<Order>, correlation_id: CorrelationId) -> Vec<Order> {
        Self::stamp_at(batch, correlation_id, Utc::now())
    }

    /// Assign the correlation id to every order and fill missing creation
    /// times with `submitted_at`. Caller-supplied creation times are kept.
    pub fn stamp_at(
        batch: Vec<Order>,
        correlation_id: CorrelationId,
        submitted_at: DateTime<Utc>,
    ) -> Vec<Order> {
        batch
            .into_iter()
            .map(|mut order| {
                order.request_id = Some(correlation_id);
                order.created_at.get_or_insert(submitted_at);
                order
            })
            .collect()
    }
}
