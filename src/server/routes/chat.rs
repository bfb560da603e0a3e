//! Chat completion endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::server::types::ChatRequestBody;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, web};
use tracing::debug;

/// `POST /chat`
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/chat", web::post().to(chat));
}

/// Serve one chat completion
///
/// The credentials in the body are used for this request only.
pub async fn chat(
    state: web::Data<AppState>,
    body: web::Json<ChatRequestBody>,
) -> Result<HttpResponse, GatewayError> {
    let request = body.into_inner().into_chat_request()?;
    debug!(
        provider = %request.provider,
        messages = request.messages.len(),
        credentials = request.credentials.len(),
        "Chat request received"
    );

    let response = state.service.chat(&request).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}
