//! Integration tests for batch-gateway
//!
//! These tests drive the complete actix application, middleware included,
//! against a fresh in-memory store.

pub mod auth_tests;
pub mod batch_tests;
pub mod config_tests;
pub mod error_handling_tests;
pub mod resource_tests;
