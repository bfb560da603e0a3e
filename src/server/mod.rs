//! HTTP server implementation
//!
//! Thin transport over the core: request validation, JSON envelopes, CORS
//! and request logging.

pub mod builder;
pub mod routes;
pub mod server;
pub mod state;
pub mod types;


pub use server::HttpServer;
pub use state::AppState;
