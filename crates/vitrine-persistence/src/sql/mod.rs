//! SQL-based persistence backend (MySQL/PostgreSQL via SeaORM)
//!
//! This module implements the `ConfigStore` trait over a SeaORM
//! `DatabaseConnection`. Writes run inside a transaction so a failed
//! write leaves prior state untouched. Failures surface as
//! `VitrineError` values: `StoreUnavailable` on the read path,
//! `WriteFailed` on the write path.

use async_trait::async_trait;
use sea_orm::*;

use vitrine_common::VitrineError;

use crate::entity::site_config;
use crate::model::{ConfigEntryData, NewConfigEntry};
use crate::traits::ConfigStore;

/// External database config store
///
/// Wraps a SeaORM `DatabaseConnection` and implements the `ConfigStore`
/// trait with direct database queries.
pub struct ExternalDbConfigStore {
    db: DatabaseConnection,
}

impl ExternalDbConfigStore {
    /// Create a new ExternalDbConfigStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get a reference to the underlying database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    async fn upsert_in_txn(
        &self,
        key: &str,
        value: &str,
        description: Option<&str>,
    ) -> Result<site_config::Model, DbErr> {
        let txn = self.db.begin().await?;

        let existing = site_config::Entity::find()
            .filter(site_config::Column::CfgKey.eq(key))
            .one(&txn)
            .await?;

        let model = match existing {
            Some(entity) => {
                let mut active: site_config::ActiveModel = entity.into();

                active.value = Set(Some(value.to_string()));
                if let Some(desc) = description {
                    active.description = Set(Some(desc.to_string()));
                }
                active.gmt_modified = Set(chrono::Utc::now().naive_utc());

                active.update(&txn).await?
            }
            None => {
                let now = chrono::Utc::now().naive_utc();
                let active = site_config::ActiveModel {
                    cfg_key: Set(key.to_string()),
                    value: Set(Some(value.to_string())),
                    description: Set(description.map(|d| d.to_string())),
                    gmt_create: Set(now),
                    gmt_modified: Set(now),
                    ..Default::default()
                };

                active.insert(&txn).await?
            }
        };

        txn.commit().await?;

        Ok(model)
    }
}

#[async_trait]
impl ConfigStore for ExternalDbConfigStore {
    async fn find_one(&self, key: &str) -> anyhow::Result<Option<ConfigEntryData>> {
        let entity = site_config::Entity::find()
            .filter(site_config::Column::CfgKey.eq(key))
            .one(&self.db)
            .await
            .map_err(|e| VitrineError::StoreUnavailable(e.to_string()))?;

        Ok(entity.map(ConfigEntryData::from))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<ConfigEntryData>> {
        let entities = site_config::Entity::find()
            .order_by_asc(site_config::Column::CfgKey)
            .all(&self.db)
            .await
            .map_err(|e| VitrineError::StoreUnavailable(e.to_string()))?;

        Ok(entities.into_iter().map(ConfigEntryData::from).collect())
    }

    async fn upsert(
        &self,
        key: &str,
        value: &str,
        description: Option<&str>,
    ) -> anyhow::Result<ConfigEntryData> {
        let model = self
            .upsert_in_txn(key, value, description)
            .await
            .map_err(|e| VitrineError::WriteFailed(key.to_string(), e.to_string()))?;

        Ok(model.into())
    }

    async fn insert_missing(&self, entries: &[NewConfigEntry]) -> anyhow::Result<usize> {
        let txn = self.db.begin().await?;
        let mut inserted = 0usize;

        for entry in entries {
            let existing = site_config::Entity::find()
                .filter(site_config::Column::CfgKey.eq(entry.key))
                .one(&txn)
                .await?;
            if existing.is_some() {
                tracing::debug!(key = entry.key, "config already exists, skipping");
                continue;
            }

            let now = chrono::Utc::now().naive_utc();
            let active = site_config::ActiveModel {
                cfg_key: Set(entry.key.to_string()),
                value: Set(Some(entry.value.to_string())),
                description: Set(Some(entry.description.to_string())),
                gmt_create: Set(now),
                gmt_modified: Set(now),
                ..Default::default()
            };
            active.insert(&txn).await?;
            inserted += 1;
        }

        txn.commit().await?;

        Ok(inserted)
    }
}
