//! # batch-gateway
//!
//! HTTP backend for a fleet of mobile devices: device registration, event
//! log upload, and a batch endpoint that runs many requests in one round
//! trip.
//!
//! ## Features
//!
//! - **Single route table**: external requests and batch sub-requests reach
//!   the same handlers through [`core::router`]
//! - **Batch dispatch**: ordered, all-or-nothing, sequential by default with
//!   optional bounded concurrency ([`core::batch`])
//! - **Token authentication**: a shared token checked by middleware in front
//!   of the route table
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use batch_gateway::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/gateway.yaml").await?;
//!     let gateway = Gateway::new(config)?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};

// Export core functionality
pub use core::batch::{BatchExecutor, BatchResult, SubResponseValue};
pub use core::router::{AppRouter, Dispatch, RouteRequest, RouteResponse, Router};
pub use server::{AppState, HttpServer};

use tracing::info;

/// A minimal gateway: configuration plus the HTTP server built from it
pub struct Gateway {
    config: Config,
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");

        let server = server::ServerBuilder::new()
            .with_config(config.clone())
            .build()?;

        Ok(Self { config, server })
    }

    /// Run the gateway server
    pub async fn run(self) -> Result<()> {
        info!("Starting batch gateway");
        info!("Configuration: {:#?}", self.config.server());

        self.server.start().await
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
