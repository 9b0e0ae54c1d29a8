//! Tracing subscriber setup

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{IngestError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` when set, the configured level otherwise
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| IngestError::config(format!("Invalid log level '{}': {}", config.level, e))),
    }
}

/// Install the global subscriber
///
/// Fails if a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let installed = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
    };

    installed.map_err(|e| IngestError::config(format!("Failed to initialize logging: {}", e)))
}
