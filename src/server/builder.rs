//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{IngestError, Result};
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| IngestError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config).await
    }
}

/// Build and run the server for an already-loaded configuration
pub async fn run_server(config: Config) -> Result<()> {
    info!(
        "Starting order ingest service at http://{}",
        config.server().address()
    );
    info!(
        "Batch limits: max {} records, {} workers, timeout {:?}",
        config.ingest().max_batch_size,
        config
            .ingest()
            .max_workers
            .unwrap_or(config.storage().database.pool_size()),
        config.ingest().timeout()
    );
    info!("API Endpoints:");
    info!("   POST /orders  - Ingest an order batch");
    info!("   GET  /health  - Health check");
    info!("   GET  /version - Build information");

    let server = ServerBuilder::new().with_config(config).build().await?;
    server.start().await
}
