//! Vitrine Persistence - Database entities and persistence layer
//!
//! This crate provides:
//! - SeaORM entity definitions for the site configuration table
//! - The `ConfigStore` trait abstraction for unified storage
//! - SQL (MySQL/PostgreSQL) and in-memory storage backends

pub mod entity;
pub mod memory;
pub mod model;
pub mod sql;
pub mod traits;

// Re-export sea-orm for convenience
pub use sea_orm;

// Re-export the store trait
pub use traits::ConfigStore;

// Re-export SQL backend
pub use sql::ExternalDbConfigStore;

// Re-export embedded backend
pub use memory::MemoryConfigStore;

// Re-export model types
pub use model::{ConfigEntryData, NewConfigEntry, StorageMode};
