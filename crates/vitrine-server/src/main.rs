//! Main entry point for the Vitrine content server.
//!
//! Sets up configuration, logging, and the storage backend, seeds the
//! default site configuration, and starts the HTTP server.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::{error, info};

use vitrine_content::seed_defaults;
use vitrine_persistence::{
    ConfigStore, ExternalDbConfigStore, MemoryConfigStore, StorageMode,
};
use vitrine_server::{
    model::{AppState, Configuration},
    startup,
};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize configuration and logging
    let configuration = Configuration::new();
    let _logging_guard = startup::init_logging(&configuration.logging_config())?;

    let storage_mode = configuration.storage_mode();
    info!("Storage mode: {}", storage_mode);

    let (database_connection, store): (Option<DatabaseConnection>, Arc<dyn ConfigStore>) =
        match storage_mode {
            StorageMode::ExternalDb => {
                let db = configuration.database_connection().await?;
                (Some(db.clone()), Arc::new(ExternalDbConfigStore::new(db)))
            }
            StorageMode::Memory => {
                info!("Using embedded in-memory store");
                (None, Arc::new(MemoryConfigStore::new()))
            }
        };

    // Populate defaults; a dead store must not prevent serving fallback content
    if let Err(e) = seed_defaults(store.as_ref()).await {
        error!(error = %e, "seeding defaults failed, serving fallback content");
    }

    let address = configuration.server_address();
    let port = configuration.server_port();

    let app_state = Arc::new(AppState {
        configuration,
        database_connection,
        store,
    });

    info!("Starting Vitrine content server on {}:{}", address, port);
    startup::content_server(app_state, address, port)?.await?;

    info!("Vitrine server shutdown complete");
    Ok(())
}
