//! Common test utilities for llm-platform

pub mod fixtures;
pub mod providers;

pub use fixtures::{ChatRequestFactory, GeminiPayloads};
pub use providers::ScriptedProvider;

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}
