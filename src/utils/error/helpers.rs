//! Helper functions for creating specific error types

use super::types::GatewayError;
use crate::core::router::RouterError;

impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }

    /// Provider this error is about, if any
    pub fn provider(&self) -> Option<&str> {
        match self {
            GatewayError::UnknownProvider { provider, .. }
            | GatewayError::ProviderUnhealthy { provider, .. } => Some(provider.as_str()),
            GatewayError::MissingCredential(provider) => Some(provider.as_str()),
            GatewayError::Provider(e) => Some(e.provider()),
            GatewayError::Router(RouterError::ProviderUnavailable(p)) => Some(p.as_str()),
            _ => None,
        }
    }
}
