//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig};
use crate::core::router::AppRouter;
use crate::server::handlers::route_external;
use crate::server::middleware::{AuthMiddleware, RequestIdMiddleware};
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_web::{App, HttpServer as ActixHttpServer, middleware::DefaultHeaders, web};
use tracing::info;
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Route table bound to the application state
    router: AppRouter<AppState>,
}

impl HttpServer {
    /// Create a new HTTP server backed by an in-memory store
    pub fn new(config: &Config) -> Self {
        Self::with_state(AppState::in_memory(config.clone()))
    }

    /// Create a new HTTP server around existing state
    pub fn with_state(state: AppState) -> Self {
        info!("Creating HTTP server");
        crate::config::models::auth::warn_insecure_config(state.config().auth());

        Self {
            config: state.config().server().clone(),
            router: routes::app_router(state),
        }
    }

    /// Create the Actix-web application.
    ///
    /// Every request falls through to the default service, which routes it
    /// through the gateway's own route table.
    pub fn create_app(
        router: AppRouter<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let config = router.state().config.clone();

        App::new()
            .app_data(web::Data::new(router))
            .app_data(web::PayloadConfig::new(config.server().max_body_size))
            .wrap(AuthMiddleware::new(config.auth().token.clone()))
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .wrap(DefaultHeaders::new().add(("Server", "batch-gateway")))
            .default_service(web::to(route_external))
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let port = self.config.port;
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {} with {} workers", bind_addr, workers);

        let router = self.router;
        let server = ActixHttpServer::new(move || Self::create_app(router.clone()))
            .workers(workers)
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr, port))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the route table
    pub fn router(&self) -> &AppRouter<AppState> {
        &self.router
    }
}
