//! Health check and status endpoints

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::server::types::{
    HealthRequestBody, HealthResponse, StatusResponse, VersionInfo, credential_map,
};
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, web};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::debug;

/// `/health`, `/status` and `/version`
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::post().to(health_check))
        .route("/status", web::get().to(system_status))
        .route("/version", web::get().to(version_info));
}

/// Run a health pass with the supplied credentials
///
/// Fails the same way a chat request would: the first provider without a
/// credential or failing its probe aborts the pass.
pub async fn health_check(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, GatewayError> {
    let body = HealthRequestBody::from_slice(&body)?;
    debug!(credentials = body.providers.len(), "Health check requested");

    let credentials = credential_map(body.providers);
    let providers = state.service.health(&credentials).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(HealthResponse {
        providers,
        uptime_seconds: get_uptime_seconds(),
    })))
}

/// Status snapshot of every registered provider
pub async fn system_status(state: web::Data<AppState>) -> HttpResponse {
    debug!("System status requested");

    HttpResponse::Ok().json(ApiResponse::success(StatusResponse {
        providers: state.service.status(),
        uptime_seconds: get_uptime_seconds(),
    }))
}

/// Build metadata
pub async fn version_info(state: web::Data<AppState>) -> HttpResponse {
    let info = crate::build_info();

    HttpResponse::Ok().json(ApiResponse::success(VersionInfo {
        name: crate::NAME.to_string(),
        version: info.version.to_string(),
        git_hash: info.git_hash.to_string(),
        build_time: info.build_time.to_string(),
        providers: state.service.registry().list(),
    }))
}

/// Seconds since the first call, which happens at server start
pub fn get_uptime_seconds() -> u64 {
    static START_TIME: OnceLock<Instant> = OnceLock::new();
    START_TIME.get_or_init(Instant::now).elapsed().as_secs()
}
