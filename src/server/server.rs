//! HTTP server core implementation

use crate::config::{Config, ServerConfig};
use crate::server::middleware::RequestIdMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::storage::StorageLayer;
use crate::utils::error::{IngestError, Result};
use actix_web::{App, HttpServer as ActixHttpServer, middleware::DefaultHeaders, web};
use tracing::info;
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Connect storage and build the server from configuration
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let storage = StorageLayer::new(config.storage()).await?;
        let state = AppState::new(config.clone(), storage);

        Ok(Self::with_state(state))
    }

    /// Build the server around prepared state
    pub fn with_state(state: AppState) -> Self {
        Self {
            config: state.config.server().clone(),
            state,
        }
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let json_config = web::JsonConfig::default()
            .limit(state.config.server().max_body_size)
            .error_handler(routes::orders::json_error_handler);

        App::new()
            .app_data(state)
            .app_data(json_config)
            .wrap(DefaultHeaders::new().add(("Server", "order-ingest")))
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .configure(routes::configure_routes)
    }

    /// Start the HTTP server and run until shutdown
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {} with {} workers", bind_addr, workers);

        let storage = self.state.storage.clone();
        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(workers)
            .bind(&bind_addr)
            .map_err(|e| IngestError::server(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| IngestError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        storage.close().await
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
