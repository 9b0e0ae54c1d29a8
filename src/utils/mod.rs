//! Shared utilities
//!
//! - **error**: service error type and its HTTP rendering
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;

use uuid::Uuid;

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}
