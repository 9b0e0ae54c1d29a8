//! Health check and build info endpoints

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::server::types::VersionInfo;
use crate::storage::StorageHealthStatus;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use std::borrow::Cow;
use tracing::{debug, warn};

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/version", web::get().to(version_info));
}

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: Cow<'static, str>,
    timestamp: chrono::DateTime<chrono::Utc>,
    version: Cow<'static, str>,
    storage: StorageHealthStatus,
}

/// Liveness plus backend reachability
///
/// Answers 503 when the store cannot be reached.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let storage = state.storage.health_check().await;
    let health = HealthStatus {
        status: Cow::Borrowed(if storage.overall { "healthy" } else { "unhealthy" }),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        storage,
    };

    if storage.overall {
        HttpResponse::Ok().json(ApiResponse::success(health))
    } else {
        warn!("Reporting unhealthy: storage unreachable");
        HttpResponse::ServiceUnavailable().json(ApiResponse::failure(health, "storage unreachable"))
    }
}

/// Build information
pub async fn version_info() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(VersionInfo::current()))
}
