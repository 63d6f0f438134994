//! Domain model types for the persistence abstraction layer
//!
//! These types are used as return values from the `ConfigStore` trait,
//! decoupled from specific storage backends.

use serde::{Deserialize, Serialize};

use crate::entity::site_config;

/// A single site configuration entry returned from persistence
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigEntryData {
    pub id: i64,
    pub key: String,
    pub value: Option<String>,
    pub description: Option<String>,
    pub created_time: i64,
    pub modified_time: i64,
}

impl From<site_config::Model> for ConfigEntryData {
    fn from(model: site_config::Model) -> Self {
        ConfigEntryData {
            id: model.id,
            key: model.cfg_key,
            value: model.value,
            description: model.description,
            created_time: model.gmt_create.and_utc().timestamp_millis(),
            modified_time: model.gmt_modified.and_utc().timestamp_millis(),
        }
    }
}

/// A key/value/description triple to be inserted by the seeder
#[derive(Clone, Copy, Debug)]
pub struct NewConfigEntry {
    pub key: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

/// Storage backend selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StorageMode {
    /// External MySQL/PostgreSQL database via SeaORM
    ExternalDb,
    /// Embedded in-memory store, suitable for standalone deployments
    #[default]
    Memory,
}

impl std::fmt::Display for StorageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageMode::ExternalDb => write!(f, "external_db"),
            StorageMode::Memory => write!(f, "memory"),
        }
    }
}

impl StorageMode {
    /// Parse a storage mode name as found in configuration
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "external_db" => Some(StorageMode::ExternalDb),
            "memory" => Some(StorageMode::Memory),
            _ => None,
        }
    }
}
