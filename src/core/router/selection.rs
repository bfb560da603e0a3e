//! Provider selection logic
//!
//! Selection is a pure function of the request's preference and the ordered
//! list of providers that passed the health pass. Earlier entries win.

use super::error::RouterError;
use crate::core::types::{ChatRequest, ProviderPreference};
use tracing::debug;

/// Pick the provider that will serve `request`
///
/// # Flow
///
/// 1. `Auto` takes the first healthy identity
/// 2. `Named` must appear verbatim in `healthy`
pub fn select(request: &ChatRequest, healthy: &[String]) -> Result<String, RouterError> {
    select_for(&request.provider, healthy)
}

/// Same as [`select`], driven by the preference alone
pub fn select_for(preference: &ProviderPreference, healthy: &[String]) -> Result<String, RouterError> {
    let selected = match preference {
        ProviderPreference::Auto => healthy
            .first()
            .cloned()
            .ok_or(RouterError::NoProviderAvailable)?,
        ProviderPreference::Named(name) => healthy
            .iter()
            .find(|candidate| *candidate == name)
            .cloned()
            .ok_or_else(|| RouterError::ProviderUnavailable(name.clone()))?,
    };

    debug!(preference = %preference, provider = %selected, "Selected provider");
    Ok(selected)
}
