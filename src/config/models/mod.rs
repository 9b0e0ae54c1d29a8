//! Configuration data models
//!
//! This module defines all configuration structures used throughout the service.

#![allow(missing_docs)]

pub mod ingest;
pub mod logging;
pub mod server;
pub mod service;
pub mod storage;

// Re-export all configuration types
pub use ingest::*;
pub use logging::*;
pub use server::*;
pub use service::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    10 * 1024 * 1024 // 10MB
}

pub fn default_database_url() -> String {
    "sqlite://data/orders.db?mode=rwc".to_string()
}

pub fn default_max_connections() -> u32 {
    100
}

pub fn default_min_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_max_batch_size() -> usize {
    crate::core::ingest::DEFAULT_MAX_BATCH_SIZE
}

pub fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}
