//! Actix listener wiring around the completion service

use crate::config::{Config, CorsConfig, ServerConfig};
use crate::core::completion::CompletionService;
use crate::core::providers::ProviderRegistry;
use crate::server::routes;
use crate::server::routes::health::get_uptime_seconds;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_cors::Cors;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    http::{Method, header},
    middleware::{DefaultHeaders, Logger},
    web,
};
use std::sync::Arc;
use tracing::info;

/// Gateway HTTP listener
pub struct HttpServer {
    config: ServerConfig,
    state: AppState,
}

impl HttpServer {
    /// Listener for `config`
    ///
    /// Instantiates every enabled provider once; no network access and no
    /// credentials are needed here.
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let registry = ProviderRegistry::from_config(config.providers())?;
        info!(providers = ?registry.list(), "Provider registry ready");

        let service = CompletionService::new(Arc::new(registry));
        let state = AppState::new(config.clone(), service);

        Ok(Self {
            config: config.gateway.server.clone(),
            state,
        })
    }

    /// Build a server around an existing application state
    pub fn with_state(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Application with every route and middleware attached
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
        let server_config = &state.config.gateway.server;
        let cors = build_cors(&server_config.cors);
        let json_config = web::JsonConfig::default()
            .limit(server_config.max_body_size)
            .error_handler(|err, _req| GatewayError::validation(err.to_string()).into());
        let payload_config = web::PayloadConfig::new(server_config.max_body_size);

        App::new()
            .app_data(state)
            .app_data(json_config)
            .app_data(payload_config)
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", "llm-platform")))
            .configure(routes::configure_routes)
    }

    /// Bind and serve until shutdown
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {}", bind_addr);
        get_uptime_seconds();

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(workers)
            .bind(&bind_addr)
            .map_err(|e| GatewayError::server(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!(workers, "HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// CORS middleware for the JSON routes; only origins come from configuration
fn build_cors(cors_config: &CorsConfig) -> Cors {
    if !cors_config.enabled {
        return Cors::default();
    }

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    if cors_config.allows_all_origins() {
        return cors.allow_any_origin();
    }

    for origin in &cors_config.allowed_origins {
        cors = cors.allowed_origin(origin);
    }
    if cors_config.allow_credentials {
        cors = cors.supports_credentials();
    }
    cors
}
