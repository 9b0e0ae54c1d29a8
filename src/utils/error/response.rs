//! HTTP response handling for errors

use super::types::IngestError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

impl IngestError {
    /// HTTP status, machine code and client-facing message
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            IngestError::Validation(e) => (StatusCode::BAD_REQUEST, e.code(), e.to_string()),
            IngestError::InvalidPayload(message) => {
                (StatusCode::BAD_REQUEST, "invalid_payload", message.clone())
            }
            IngestError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "config_error",
                self.to_string(),
            ),
            IngestError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database_error",
                "Database operation failed".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
            ),
        }
    }

    /// Render the error, tagging it with the request's correlation id
    pub fn to_response(&self, request_id: Option<String>) -> HttpResponse {
        let (status, code, message) = self.parts();
        HttpResponse::build(status).json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
                request_id,
            },
        })
    }
}

impl ResponseError for IngestError {
    fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    fn error_response(&self) -> HttpResponse {
        self.to_response(None)
    }
}

/// Standard error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
    pub request_id: Option<String>,
}
