//! Storage layer for the ingest service
//!
//! Owns the database lifecycle and hands the ingestion core a backend.

/// Database storage module
pub mod database;
/// In-memory storage module
pub mod memory;

use crate::config::StorageConfig;
use crate::core::ingest::PersistenceBackend;
use crate::utils::error::Result;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub use memory::MemoryBackend;

/// Storage layer wiring the configured backend
#[derive(Clone)]
pub struct StorageLayer {
    /// Database connection pool, absent when the database is disabled
    pub database: Option<Arc<database::Database>>,
    backend: Arc<dyn PersistenceBackend>,
}

impl std::fmt::Debug for StorageLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageLayer")
            .field("database", &self.database)
            .finish_non_exhaustive()
    }
}

impl StorageLayer {
    /// Connect to the configured store and run migrations
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        info!("Initializing storage layer");

        if !config.database.enabled {
            warn!("Database disabled, orders will be kept in memory");
            return Ok(Self::in_memory());
        }

        debug!("Connecting to database");
        let database = Arc::new(database::Database::new(&config.database).await?);
        database.migrate().await?;

        info!("Storage layer initialized successfully");
        Ok(Self {
            backend: database.clone(),
            database: Some(database),
        })
    }

    /// Storage backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::with_backend(Arc::new(MemoryBackend::new()))
    }

    /// Storage around an already-built backend
    pub fn with_backend(backend: Arc<dyn PersistenceBackend>) -> Self {
        Self {
            database: None,
            backend,
        }
    }

    /// Backend handed to the ingestion core
    pub fn backend(&self) -> Arc<dyn PersistenceBackend> {
        self.backend.clone()
    }

    /// Health check for the active backend
    pub async fn health_check(&self) -> StorageHealthStatus {
        let backend = match self.backend.health_check().await {
            Ok(()) => true,
            Err(e) => {
                warn!("Storage health check failed: {}", e);
                false
            }
        };

        StorageHealthStatus {
            database: self.database.is_some() && backend,
            overall: backend,
        }
    }

    /// Close the database pool if there is one
    pub async fn close(&self) -> Result<()> {
        if let Some(database) = &self.database {
            database.close().await?;
        }
        Ok(())
    }
}

/// Storage health status
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StorageHealthStatus {
    /// Database reachable
    pub database: bool,
    /// Active backend reachable
    pub overall: bool,
}
