//! Batch validation logic

use super::error::ValidationError;
use super::types::Order;

/// Default upper bound on orders per batch
pub const DEFAULT_MAX_BATCH_SIZE: usize = 1000;

/// Maximum customer name length in characters
pub const MAX_CUSTOMER_LEN: usize = 100;

/// Rejects batches that must not reach the store
#[derive(Debug, Clone, Copy)]
pub struct BatchValidator {
    max_batch_size: usize,
}

impl Default for BatchValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BATCH_SIZE)
    }
}

impl BatchValidator {
    pub fn new(max_batch_size: usize) -> Self {
        Self { max_batch_size }
    }

    pub fn max_batch_size(&self) -> usize {
        self.max_batch_size
    }

    /// Validate the batch size and every order in it
    ///
    /// An empty batch is valid. Reports the first malformed order only.
    pub fn validate(&self, batch: &[Order]) -> Result<(), ValidationError> {
        if batch.len() > self.max_batch_size {
            return Err(ValidationError::BatchTooLarge {
                count: batch.len(),
                max: self.max_batch_size,
            });
        }

        for (index, order) in batch.iter().enumerate() {
            Self::validate_record(index, order)?;
        }

        Ok(())
    }

    /// Validate a single order
    pub fn validate_record(index: usize, order: &Order) -> Result<(), ValidationError> {
        let malformed = |reason: &str| ValidationError::MalformedBatch {
            index,
            reason: reason.to_string(),
        };

        if order.customer.trim().is_empty() {
            return Err(malformed("customer is required"));
        }

        if order.customer.chars().count() > MAX_CUSTOMER_LEN {
            return Err(ValidationError::MalformedBatch {
                index,
                reason: format!("customer must be at most {} characters", MAX_CUSTOMER_LEN),
            });
        }

        if !order.price.is_finite() {
            return Err(malformed("price must be a finite number"));
        }

        if order.price < 0.0 {
            return Err(malformed("price must not be negative"));
        }

        Ok(())
    }
}
