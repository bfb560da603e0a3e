//! Per-request provider credentials
//!
//! A credential only lives as long as the request that carried it. It is
//! deliberately not `Serialize` and its `Debug` output is redacted so that it
//! cannot end up in logs or responses by accident.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Opaque secret used to authenticate against one provider backend
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Borrow the raw secret for the outbound call
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl From<&str> for Credential {
    fn from(secret: &str) -> Self {
        Self::new(secret)
    }
}

impl From<String> for Credential {
    fn from(secret: String) -> Self {
        Self::new(secret)
    }
}

/// Mapping from provider identity to the credential supplied for it
pub type CredentialMap = HashMap<String, Credential>;
