//! Router error types

/// Router error types
///
/// Both variants are user-facing: they describe what the caller asked for
/// against what the health pass let through.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    /// Automatic routing found no healthy provider
    #[error("No healthy provider available")]
    NoProviderAvailable,

    /// The explicitly requested provider is unknown or did not pass the health pass
    #[error("Provider {0} is not available")]
    ProviderUnavailable(String),
}
