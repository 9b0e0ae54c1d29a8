//! Helper functions for creating specific error types

use super::types::IngestError;

impl IngestError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn invalid_payload<S: Into<String>>(message: S) -> Self {
        Self::InvalidPayload(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the caller sent something the service refused
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidPayload(_))
    }
}
