//! Core error type definitions

use crate::core::ingest::ValidationError;
use thiserror::Error;

/// Result type alias for the ingest service
pub type Result<T> = std::result::Result<T, IngestError>;

/// Main error type for the ingest service
#[derive(Error, Debug)]
pub enum IngestError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Batch rejected before any write
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Request body could not be decoded into a batch
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
