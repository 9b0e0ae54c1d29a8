//! Core functionality of the ingest service
//!
//! This module contains the batch ingestion business logic.

pub mod ingest;
