//! Typed configuration sections and their serde defaults

pub mod gateway;
pub mod logging;
pub mod provider;
pub mod server;

pub use gateway::*;
pub use logging::*;
pub use provider::*;
pub use server::*;

pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub fn default_port() -> u16 {
    8000
}

/// Seconds before an outbound provider call is abandoned
pub fn default_timeout() -> u64 {
    60
}

/// 1 MiB
pub fn default_max_body_size() -> usize {
    1 << 20
}

pub fn default_true() -> bool {
    true
}

pub fn default_log_level() -> String {
    "info".to_string()
}
