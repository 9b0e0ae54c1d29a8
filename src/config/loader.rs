//! Configuration loading utilities
//!
//! Environment variables override whatever the file provided.

use super::models::*;
use crate::utils::error::{IngestError, Result};
use std::env;
use std::str::FromStr;
use tracing::debug;

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| IngestError::Config(format!("Invalid {}: {}", name, e)))
}

impl ServiceConfig {
    /// Load configuration from environment variables on top of defaults
    pub fn from_env() -> Result<Self> {
        Self::default().apply_env()
    }

    /// Apply overrides from the process environment
    pub fn apply_env(self) -> Result<Self> {
        self.apply_env_with(|name| env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_env_with<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Applying environment overrides");

        if let Some(host) = lookup("INGEST_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("INGEST_PORT") {
            self.server.port = parse_var("INGEST_PORT", &port)?;
        }

        if let Some(url) = lookup("DATABASE_URL") {
            self.storage.database.url = url;
        }
        if let Some(max_conn) = lookup("DATABASE_MAX_CONNECTIONS") {
            self.storage.database.max_connections =
                parse_var("DATABASE_MAX_CONNECTIONS", &max_conn)?;
        }

        if let Some(size) = lookup("INGEST_MAX_BATCH_SIZE") {
            self.ingest.max_batch_size = parse_var("INGEST_MAX_BATCH_SIZE", &size)?;
        }
        if let Some(workers) = lookup("INGEST_MAX_WORKERS") {
            self.ingest.max_workers = Some(parse_var("INGEST_MAX_WORKERS", &workers)?);
        }
        if let Some(timeout) = lookup("INGEST_TIMEOUT_MS") {
            self.ingest.timeout_ms = Some(parse_var("INGEST_TIMEOUT_MS", &timeout)?);
        }

        Ok(self)
    }
}
