//! Integration tests for order-ingest
//!
//! These tests verify the interaction between the ingestion core, storage
//! and the HTTP layer.

pub mod config_tests;
pub mod database_tests;
pub mod http_tests;
