//! HTTP server implementation
//!
//! This module provides the HTTP server, its middleware and the gateway's
//! route table.

// Submodules
pub mod middleware;
pub mod routes;

pub mod builder;
pub mod handlers;
pub mod server;
pub mod state;
mod utils;


pub use builder::{ServerBuilder, load_config, run_server};
pub use server::HttpServer;
pub use state::AppState;
