//! Core traits module
//!
//! Contains the abstract interface every provider backend implements

pub mod provider;

pub use provider::*;
