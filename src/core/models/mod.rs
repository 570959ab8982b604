//! Core data models for the gateway
//!
//! Devices register as users and upload event logs against their device ID.

pub mod log;
pub mod user;

// Re-export commonly used types
pub use log::*;
pub use user::*;
