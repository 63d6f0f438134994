//! Application state management
//!
//! This module defines the central application state shared across all
//! handlers. The store handle is an explicit capability handed to the
//! resolver and aggregator, never ambient global state.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use vitrine_content::{ContentAggregator, ImageResolver};
use vitrine_persistence::ConfigStore;

use super::config::Configuration;

/// Application state shared across all handlers
pub struct AppState {
    pub configuration: Configuration,
    /// Underlying database handle, `None` in embedded storage mode
    pub database_connection: Option<DatabaseConnection>,
    /// Site configuration store backing all resolution
    pub store: Arc<dyn ConfigStore>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("configuration", &self.configuration)
            .field("database_connection", &self.database_connection.is_some())
            .field("store", &"<dyn ConfigStore>")
            .finish()
    }
}

impl AppState {
    /// Image resolver over the shared store
    pub fn resolver(&self) -> ImageResolver {
        ImageResolver::new(self.store.clone())
    }

    /// About-content aggregator over the shared store
    pub fn aggregator(&self) -> ContentAggregator {
        ContentAggregator::new(self.store.clone())
    }
}
