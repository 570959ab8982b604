//! Core functionality for the gateway
//!
//! - `router`: the route table shared by external and synthetic requests
//! - `batch`: the batch request dispatcher
//! - `models`: users and their logs

pub mod batch;
pub mod models;
pub mod router;
