//! Configuration management for the ingest service
//!
//! This module handles loading, validation, and management of service configuration.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{IngestError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Default configuration file location
pub const DEFAULT_CONFIG_PATH: &str = "config/ingest.yaml";

/// Main configuration struct for the service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,
}

impl Config {
    /// Load and validate configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self {
            service: Self::read_file(path.as_ref()).await?,
        };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse a config file without validating it
    async fn read_file(path: &Path) -> Result<ServiceConfig> {
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| IngestError::Config(format!("Failed to read config file: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| IngestError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let service = ServiceConfig::from_env()?;
        let config = Self { service };

        config.validate()?;
        Ok(config)
    }

    /// Load the file when it exists, defaults otherwise, then apply environment overrides
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with(path, |name| std::env::var(name).ok()).await
    }

    /// Same as [`Config::load`] with an explicit variable lookup.
    /// Validation runs once, after overrides.
    pub async fn load_with<P, F>(path: P, lookup: F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        let service = if path.exists() {
            Self::read_file(path).await?
        } else {
            info!("Config file {:?} not found, using defaults", path);
            ServiceConfig::default()
        };

        let config = Self {
            service: service.apply_env_with(lookup)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.service.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.service.storage
    }

    /// Get ingest limits
    pub fn ingest(&self) -> &IngestConfig {
        &self.service.ingest
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.service.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.service
            .server
            .validate()
            .map_err(|e| IngestError::Config(format!("Server config error: {}", e)))?;

        self.service
            .storage
            .validate()
            .map_err(|e| IngestError::Config(format!("Storage config error: {}", e)))?;

        self.service
            .ingest
            .validate()
            .map_err(|e| IngestError::Config(format!("Ingest config error: {}", e)))?;

        self.service
            .logging
            .validate()
            .map_err(|e| IngestError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.service = self.service.merge(other.service);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.service)
            .map_err(|e| IngestError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
