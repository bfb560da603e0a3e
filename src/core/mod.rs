//! Core functionality for the Gateway
//!
//! Provider contract, registry, health pass, routing and the per-request
//! completion flow that ties them together.

pub mod completion;
pub mod health;
pub mod providers;
pub mod router;
pub mod traits;
pub mod types;
