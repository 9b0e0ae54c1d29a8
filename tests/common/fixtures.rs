//! Test fixtures and data factories
//!
//! Provides factory methods for creating orders with sensible defaults.

use chrono::{DateTime, TimeZone, Utc};
use order_ingest::core::ingest::Order;
use serde_json::{Value, json};

/// Factory for creating test orders
pub struct OrderFactory;

impl OrderFactory {
    /// Customer name used for the order at `index`
    pub fn customer(index: usize) -> String {
        format!("customer-{index}")
    }

    /// Create a basic order
    pub fn create(index: usize) -> Order {
        Order::new(Self::customer(index), (index % 10) as u32 + 1, 10.0 + index as f64)
    }

    /// Create an order with a fixed creation time
    pub fn created_at(index: usize, created_at: DateTime<Utc>) -> Order {
        Self::create(index).with_created_at(created_at)
    }

    /// Create `n` distinct orders
    pub fn batch(n: usize) -> Vec<Order> {
        (0..n).map(Self::create).collect()
    }

    /// Create `n` identical orders
    pub fn identical(n: usize) -> Vec<Order> {
        vec![Order::new("same-customer", 1, 1.0); n]
    }

    /// JSON body for `POST /orders`
    pub fn request_body(request_id: u32, n: usize) -> Value {
        let data: Vec<Value> = (0..n)
            .map(|i| {
                json!({
                    "customer": Self::customer(i),
                    "quantity": (i % 10) + 1,
                    "price": 10.0 + i as f64,
                })
            })
            .collect();
        json!({ "request_id": request_id, "data": data })
    }
}

/// Fixed timestamp for deterministic assertions
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()
}
