//! Request routing
//!
//! Chooses which healthy provider serves a chat request.
//!
//! ## Module Structure
//!
//! - `error` - Routing error types
//! - `selection` - Provider selection

pub mod error;
pub mod selection;


pub use error::RouterError;
pub use selection::{select, select_for};
