//! Order ingestion endpoint

use crate::server::middleware::request_id;
use crate::server::state::AppState;
use crate::server::types::{IngestRequest, IngestResponse};
use crate::utils::error::IngestError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{info, warn};

/// Configure order routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/orders", web::post().to(create_orders));
}

/// Ingest one batch of orders
///
/// 201 when every order was written, 207 when some failed, 400 when the
/// batch was rejected before any write.
pub async fn create_orders(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<IngestRequest>,
) -> HttpResponse {
    let IngestRequest { request_id: correlation_id, data } = body.into_inner();
    info!(request_id = %correlation_id, records = data.len(), "Received order batch");

    let report = match state
        .coordinator
        .ingest(data, correlation_id, state.backend.clone())
        .await
    {
        Ok(report) => report,
        Err(e) => return IngestError::from(e).to_response(request_id(&req)),
    };

    let status = if report.is_complete_success() {
        StatusCode::CREATED
    } else {
        warn!(
            request_id = %correlation_id,
            failed = report.failure_count(),
            "Batch partially persisted"
        );
        StatusCode::MULTI_STATUS
    };

    HttpResponse::build(status).json(IngestResponse::from(report))
}

/// Render JSON extractor failures as `invalid_payload`
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    req: &HttpRequest,
) -> actix_web::Error {
    let error = IngestError::from(err);
    warn!("Rejected request body: {}", error);
    let response = error.to_response(request_id(req));
    actix_web::error::InternalError::from_response(error, response).into()
}
