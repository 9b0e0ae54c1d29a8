//! Validators for each configuration section

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if self.workers == Some(0) {
            return Err("Server workers must be greater than 0".to_string());
        }

        if self.max_body_size == 0 {
            return Err("Server max body size must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating storage configuration");
        self.database.validate()
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        if self.url.is_empty() {
            return Err("Database URL cannot be empty".to_string());
        }

        let supported = ["postgresql://", "postgres://", "sqlite:"];
        if !supported.iter().any(|scheme| self.url.starts_with(scheme)) {
            return Err("Only PostgreSQL and SQLite databases are supported".to_string());
        }

        if self.max_connections == 0 {
            return Err("Database max connections must be greater than 0".to_string());
        }

        if self.max_connections > 1000 {
            return Err("Database max connections should not exceed 1000".to_string());
        }

        if self.min_connections > self.max_connections {
            return Err("Database min connections cannot exceed max connections".to_string());
        }

        if self.connection_timeout == 0 {
            return Err("Database connection timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for IngestConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_batch_size == 0 {
            return Err("Max batch size must be greater than 0".to_string());
        }

        if self.max_workers == Some(0) {
            return Err("Max workers must be greater than 0".to_string());
        }

        if self.timeout_ms == Some(0) {
            return Err("Batch timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
