//! Application state shared across route handlers

use crate::config::Config;
use crate::storage::{EntityStore, MemoryStore};
use std::sync::Arc;

/// State shared by every handler of the route table.
///
/// Fields are wrapped in `Arc` so the state can be cloned into each worker.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Entity storage
    pub store: Arc<dyn EntityStore>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, store: Arc<dyn EntityStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// State backed by a fresh in-memory store
    pub fn in_memory(config: Config) -> Self {
        Self::new(config, Arc::new(MemoryStore::new()))
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get entity storage
    pub fn store(&self) -> &dyn EntityStore {
        self.store.as_ref()
    }
}
