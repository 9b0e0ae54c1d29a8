//! Main service configuration

#![allow(missing_docs)]

use super::*;
use serde::{Deserialize, Serialize};

/// Main service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Batch ingestion limits
    #[serde(default)]
    pub ingest: IngestConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.storage = self.storage.merge(other.storage);
        self.ingest = self.ingest.merge(other.ingest);
        self.logging = self.logging.merge(other.logging);
        self
    }
}
