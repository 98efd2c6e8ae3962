//! HTTP server implementation
//!
//! This module provides the HTTP server and routing functionality.

pub mod extract;
pub mod middleware;
pub mod routes;

pub mod builder;
pub mod server;
pub mod state;

pub use builder::{ServerBuilder, run_server};
pub use extract::AuthenticatedUser;
pub use server::HttpServer;
pub use state::AppState;
