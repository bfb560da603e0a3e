//! Route table
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST | `/chat` | [`chat::chat`] |
//! | POST | `/health` | [`health::health_check`] |
//! | GET | `/status` | [`health::system_status`] |
//! | GET | `/version` | [`health::version_info`] |

pub mod chat;
pub mod health;

use actix_web::web;
use serde::{Deserialize, Serialize};

/// Success envelope shared by every route; failures use
/// [`ErrorResponse`](crate::utils::error::ErrorResponse) instead
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    chat::configure_routes(cfg);
    health::configure_routes(cfg);
}
