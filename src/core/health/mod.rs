//! Health monitoring for providers
//!
//! A health pass runs once per request against every registered provider,
//! using the credentials that request supplied.
//!
//! # Module Structure
//!
//! - `monitor` - Health monitor and the fail-fast health pass
//! - `tests` - Test suite for health monitoring

pub mod monitor;

pub use crate::core::types::HealthCheckResult;
pub use monitor::HealthMonitor;
