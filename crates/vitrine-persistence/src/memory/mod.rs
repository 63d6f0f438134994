// Embedded persistence backend using an in-memory map
// Provides standalone (single-node) storage without an external database

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::model::{ConfigEntryData, NewConfigEntry};
use crate::traits::ConfigStore;

/// Standalone embedded config store
///
/// Keeps all entries in a concurrent map. Suitable for single-node
/// deployments without an external database, and for tests.
#[derive(Default)]
pub struct MemoryConfigStore {
    entries: DashMap<String, ConfigEntryData>,
    next_id: AtomicI64,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    fn now_millis() -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

#[async_trait]
impl ConfigStore for MemoryConfigStore {
    async fn find_one(&self, key: &str) -> anyhow::Result<Option<ConfigEntryData>> {
        Ok(self.entries.get(key).map(|e| e.clone()))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<ConfigEntryData>> {
        let mut all: Vec<ConfigEntryData> =
            self.entries.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(all)
    }

    async fn upsert(
        &self,
        key: &str,
        value: &str,
        description: Option<&str>,
    ) -> anyhow::Result<ConfigEntryData> {
        let now = Self::now_millis();
        let mut entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| ConfigEntryData {
                id: self.next_id.fetch_add(1, Ordering::SeqCst),
                key: key.to_string(),
                value: None,
                description: None,
                created_time: now,
                modified_time: now,
            });

        entry.value = Some(value.to_string());
        if let Some(desc) = description {
            entry.description = Some(desc.to_string());
        }
        entry.modified_time = now;

        Ok(entry.clone())
    }

    async fn insert_missing(&self, entries: &[NewConfigEntry]) -> anyhow::Result<usize> {
        let mut inserted = 0usize;

        for entry in entries {
            if self.entries.contains_key(entry.key) {
                continue;
            }
            let now = Self::now_millis();
            self.entries.insert(
                entry.key.to_string(),
                ConfigEntryData {
                    id: self.next_id.fetch_add(1, Ordering::SeqCst),
                    key: entry.key.to_string(),
                    value: Some(entry.value.to_string()),
                    description: Some(entry.description.to_string()),
                    created_time: now,
                    modified_time: now,
                },
            );
            inserted += 1;
        }

        Ok(inserted)
    }
}
