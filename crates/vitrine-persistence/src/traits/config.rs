//! Config store trait
//!
//! Defines the interface for site configuration storage operations.
//! The resolver and aggregator depend on this trait rather than on a
//! concrete backend, so read-path callers can be tested against doubles
//! and the server can switch between SQL and embedded storage.

use async_trait::async_trait;

use crate::model::{ConfigEntryData, NewConfigEntry};

/// Site configuration persistence operations
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Find a single config entry by key
    async fn find_one(&self, key: &str) -> anyhow::Result<Option<ConfigEntryData>>;

    /// Find all config entries, ordered by key
    async fn find_all(&self) -> anyhow::Result<Vec<ConfigEntryData>>;

    /// Create or update a config entry.
    ///
    /// If a row with `key` exists its value is updated in place (and its
    /// description, when one is supplied) and the modification timestamp
    /// refreshes; otherwise a new row is inserted. On failure the prior
    /// state is left unchanged and the error is returned to the caller.
    async fn upsert(
        &self,
        key: &str,
        value: &str,
        description: Option<&str>,
    ) -> anyhow::Result<ConfigEntryData>;

    /// Insert every entry whose key is not yet present; existing rows are
    /// never overwritten. All inserts commit as one batch. Returns the
    /// number of rows inserted.
    async fn insert_missing(&self, entries: &[NewConfigEntry]) -> anyhow::Result<usize>;
}
