//! HTTP response handling for errors

use super::types::GatewayError;
use crate::core::providers::unified_provider::ProviderError;
use crate::core::router::RouterError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

/// Message returned for backend failures; the detail stays in the logs
const UPSTREAM_MESSAGE: &str = "Upstream provider error";
const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl GatewayError {
    /// Status, machine-readable code and client-facing message
    fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            GatewayError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                self.to_string(),
            ),
            GatewayError::Validation(_) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", self.to_string())
            }
            GatewayError::UnknownProvider { .. } => {
                (StatusCode::NOT_FOUND, "PROVIDER_NOT_FOUND", self.to_string())
            }
            GatewayError::MissingCredential(_) => (
                StatusCode::BAD_REQUEST,
                "MISSING_CREDENTIAL",
                self.to_string(),
            ),
            GatewayError::ProviderUnhealthy { .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "PROVIDER_UNHEALTHY",
                self.to_string(),
            ),
            GatewayError::Provider(provider_error) => match provider_error {
                ProviderError::Authentication { .. } => (
                    StatusCode::UNAUTHORIZED,
                    "PROVIDER_AUTH_ERROR",
                    provider_error.to_string(),
                ),
                ProviderError::Configuration { .. } => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PROVIDER_CONFIG_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                ),
                ProviderError::Generation { .. }
                | ProviderError::Upstream { .. }
                | ProviderError::Serialization { .. } => (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    UPSTREAM_MESSAGE.to_string(),
                ),
            },
            GatewayError::Router(router_error) => match router_error {
                RouterError::NoProviderAvailable => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "NO_PROVIDER_AVAILABLE",
                    self.to_string(),
                ),
                RouterError::ProviderUnavailable(_) => (
                    StatusCode::BAD_REQUEST,
                    "PROVIDER_UNAVAILABLE",
                    self.to_string(),
                ),
            },
            GatewayError::Io(_)
            | GatewayError::Serialization(_)
            | GatewayError::Internal(_)
            | GatewayError::Server(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                INTERNAL_MESSAGE.to_string(),
            ),
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        self.classify().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = self.classify();

        let error_response = ErrorResponse {
            success: false,
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                provider: self.provider().map(str::to_string),
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    pub timestamp: i64,
}
