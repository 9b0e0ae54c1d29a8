//! Type conversions into IngestError

use super::types::IngestError;
use actix_web::error::JsonPayloadError;

impl From<JsonPayloadError> for IngestError {
    fn from(err: JsonPayloadError) -> Self {
        match err {
            JsonPayloadError::Overflow { limit } => {
                IngestError::InvalidPayload(format!("payload exceeds {} bytes", limit))
            }
            JsonPayloadError::ContentType => {
                IngestError::InvalidPayload("expected content type application/json".to_string())
            }
            JsonPayloadError::Deserialize(e) => IngestError::InvalidPayload(e.to_string()),
            other => IngestError::InvalidPayload(other.to_string()),
        }
    }
}
