//! Core type definition module
//!
//! Contains the data structures shared by providers, the health monitor,
//! the router and the transport layer.

pub mod chat;
pub mod credential;
pub mod health;
pub mod message;
pub mod metrics;

// Re-export all public types
pub use chat::*;
pub use credential::*;
pub use health::*;
pub use message::*;
pub use metrics::*;
