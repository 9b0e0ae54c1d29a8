//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::ingest::{BatchIngestCoordinator, PersistenceBackend};
use crate::storage::StorageLayer;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Cloned into every actix worker; all fields are reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Batch ingestion entry point
    pub coordinator: Arc<BatchIngestCoordinator>,
    /// Store the coordinator writes through
    pub backend: Arc<dyn PersistenceBackend>,
    /// Storage layer owning the backend's lifecycle
    pub storage: Arc<StorageLayer>,
}

impl AppState {
    /// Wire the coordinator to the storage layer's backend
    pub fn new(config: Config, storage: StorageLayer) -> Self {
        let pool_size = config.storage().database.pool_size();
        let coordinator = BatchIngestCoordinator::from_config(config.ingest(), pool_size);

        Self {
            backend: storage.backend(),
            config: Arc::new(config),
            coordinator: Arc::new(coordinator),
            storage: Arc::new(storage),
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
