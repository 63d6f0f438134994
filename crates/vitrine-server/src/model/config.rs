//! Configuration management for the Vitrine server
//!
//! This module handles loading and accessing application configuration.
//! Values come from `conf/application.yml`, environment variables with
//! the `vitrine` prefix, and command line overrides, in rising priority.

use std::time::Duration;

use clap::Parser;
use config::{Config, Environment};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use vitrine_persistence::StorageMode;

use crate::startup::logging::LoggingConfig;

const DEFAULT_SERVER_PORT: u16 = 5000;

/// Command line arguments for the server
#[derive(Debug, Parser)]
#[command()]
struct Cli {
    #[arg(short = 's', long = "storage")]
    storage: Option<String>,
    #[arg(long = "db-url", env = "DATABASE_URL")]
    database_url: Option<String>,
    #[arg(short = 'p', long = "port")]
    port: Option<u16>,
}

/// Application configuration loaded from config files and environment
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    pub fn new() -> Self {
        let args = Cli::parse();
        let mut config_builder = Config::builder()
            .add_source(
                Environment::with_prefix("vitrine")
                    .separator(".")
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("conf/application.yml"));

        if let Some(v) = args.storage {
            config_builder = config_builder
                .set_override("storage.mode", v)
                .expect("Failed to set storage mode override");
        }
        if let Some(v) = args.database_url {
            config_builder = config_builder
                .set_override("db.url", v)
                .expect("Failed to set database URL override");
        }
        if let Some(v) = args.port {
            config_builder = config_builder
                .set_override("server.port", i64::from(v))
                .expect("Failed to set server port override");
        }

        let app_config = config_builder
            .build()
            .expect("Failed to build configuration - check conf/application.yml");

        Configuration { config: app_config }
    }

    // ========================================================================
    // Server Configuration
    // ========================================================================

    pub fn server_address(&self) -> String {
        self.config
            .get_string("server.address")
            .unwrap_or("0.0.0.0".to_string())
    }

    pub fn server_port(&self) -> u16 {
        self.config
            .get_int("server.port")
            .unwrap_or(DEFAULT_SERVER_PORT.into()) as u16
    }

    // ========================================================================
    // Storage Configuration
    // ========================================================================

    pub fn storage_mode(&self) -> StorageMode {
        self.config
            .get_string("storage.mode")
            .ok()
            .and_then(|v| StorageMode::parse(&v))
            .unwrap_or_default()
    }

    pub async fn database_connection(
        &self,
    ) -> std::result::Result<DatabaseConnection, Box<dyn std::error::Error>> {
        let max_connections = self.config.get_int("db.pool.maxConnections").unwrap_or(20) as u32;
        let min_connections = self.config.get_int("db.pool.minConnections").unwrap_or(1) as u32;
        let connect_timeout = self.config.get_int("db.pool.connectTimeout").unwrap_or(30) as u64;
        let acquire_timeout = self.config.get_int("db.pool.acquireTimeout").unwrap_or(8) as u64;
        let idle_timeout = self.config.get_int("db.pool.idleTimeout").unwrap_or(10) as u64;
        let max_lifetime = self.config.get_int("db.pool.maxLifetime").unwrap_or(1800) as u64;
        let sqlx_logging = self.config.get_bool("db.pool.sqlxLogging").unwrap_or(false);

        let url = self.config.get_string("db.url")?;

        let mut opt = ConnectOptions::new(url);

        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(connect_timeout))
            .acquire_timeout(Duration::from_secs(acquire_timeout))
            .idle_timeout(Duration::from_secs(idle_timeout))
            .max_lifetime(Duration::from_secs(max_lifetime))
            .sqlx_logging(sqlx_logging);

        tracing::info!(
            max_connections = max_connections,
            min_connections = min_connections,
            connect_timeout = connect_timeout,
            idle_timeout = idle_timeout,
            max_lifetime = max_lifetime,
            sqlx_logging = sqlx_logging,
            "Database connection pool configured"
        );

        let database_connection: DatabaseConnection = Database::connect(opt).await?;

        Ok(database_connection)
    }

    // ========================================================================
    // Logging Configuration
    // ========================================================================

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            directory: self
                .config
                .get_string("logging.dir")
                .unwrap_or("logs".to_string()),
            file_name: self
                .config
                .get_string("logging.file")
                .unwrap_or("vitrine.log".to_string()),
            level: self
                .config
                .get_string("logging.level")
                .unwrap_or("info".to_string()),
            console: self.config.get_bool("logging.console").unwrap_or(true),
        }
    }
}
