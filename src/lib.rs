//! # order-ingest
//!
//! Batch order ingestion with bounded concurrent persistence.
//!
//! A submitted batch is validated, stamped with the request's correlation id,
//! written through a [`PersistenceBackend`](core::ingest::PersistenceBackend)
//! by a bounded pool of workers, and summarized in a
//! [`Report`](core::ingest::Report) naming every order that failed.
//!
//! ## Library use
//!
//! ```rust,no_run
//! use order_ingest::core::ingest::{
//!     BatchIngestCoordinator, BatchValidator, ConcurrentPersister, CorrelationId, Order,
//! };
//! use order_ingest::storage::MemoryBackend;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let coordinator = BatchIngestCoordinator::new(
//!         BatchValidator::new(1000),
//!         ConcurrentPersister::new(8),
//!         None,
//!     );
//!     let batch = vec![Order::new("alice", 2, 9.99), Order::new("bob", 1, 4.5)];
//!
//!     let report = coordinator
//!         .ingest(batch, CorrelationId(42), Arc::new(MemoryBackend::new()))
//!         .await?;
//!     println!("{} of {} written", report.success_count, report.total);
//!     Ok(())
//! }
//! ```
//!
//! ## Service mode
//!
//! ```rust,no_run
//! use order_ingest::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/ingest.yaml").await?;
//!     server::builder::run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::ingest::{
    BatchIngestCoordinator, CorrelationId, Order, PersistenceBackend, Report,
};
pub use utils::error::{IngestError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Service build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (unix seconds)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
        }
    }
}

/// Build information baked in at compile time
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
