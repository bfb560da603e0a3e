//! Utility modules for the Gateway
//!
//! - **error**: Error types and their HTTP mapping

pub mod error;
