use crate::config::DatabaseConfig;
use crate::utils::error::{IngestError, Result};
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::super::migration::Migrator;
use super::types::{DatabaseBackendType, SeaOrmDatabase};

/// File behind a sqlite URL; `None` for in-memory and non-sqlite URLs
pub(super) fn sqlite_file(url: &str) -> Option<&Path> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
    if path.is_empty() || path == ":memory:" || query.contains("mode=memory") {
        return None;
    }
    Some(Path::new(path))
}

impl SeaOrmDatabase {
    /// Create a new connection pool
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let backend_type = DatabaseBackendType::from_url(&config.url);

        if let Some(dir) = sqlite_file(&config.url)
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
        {
            tokio::fs::create_dir_all(dir).await.map_err(|e| {
                IngestError::Internal(format!(
                    "Failed to create database directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        }

        let mut opt = ConnectOptions::new(config.url.clone());
        opt.max_connections(config.max_connections)
            .min_connections(config.min_connections.min(config.max_connections))
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(3600))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        let db = Database::connect(opt).await.map_err(IngestError::Database)?;

        info!(
            "Database connection established ({:?}, max {} connections)",
            backend_type, config.max_connections
        );
        Ok(Self { db, backend_type })
    }

    /// Get the current backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            IngestError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Close the pool; in-flight queries finish first
    pub async fn close(&self) -> Result<()> {
        self.db.clone().close().await.map_err(IngestError::Database)?;
        info!("Database connection closed");
        Ok(())
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        debug!("Performing database health check");
        self.db.ping().await.map_err(IngestError::Database)?;
        debug!("Database health check passed");
        Ok(())
    }
}
