//! Four-tier image URL resolution
//!
//! Precedence is fixed: environment override, then stored value, then the
//! category's remote fallback, then the local default. An empty value at
//! any tier counts as absent, and a store failure degrades to the next
//! tier, so resolution always returns a string.

use std::sync::Arc;

use vitrine_persistence::ConfigStore;

use crate::category::{ImageCategory, PLACEHOLDER_IMAGE_PATH};
use crate::env::{EnvReader, ProcessEnv};

/// Resolves image categories to concrete URLs or paths
#[derive(Clone)]
pub struct ImageResolver {
    store: Arc<dyn ConfigStore>,
    env: Arc<dyn EnvReader>,
}

impl ImageResolver {
    /// Create a resolver reading overrides from the process environment
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self::with_env(store, Arc::new(ProcessEnv))
    }

    /// Create a resolver with an explicit environment source
    pub fn with_env(store: Arc<dyn ConfigStore>, env: Arc<dyn EnvReader>) -> Self {
        Self { store, env }
    }

    fn env_override(&self, var: &str) -> Option<String> {
        self.env.get(var).filter(|v| !v.is_empty())
    }

    async fn stored_value(&self, key: &str) -> Option<String> {
        match self.store.find_one(key).await {
            Ok(Some(entry)) => entry.value.filter(|v| !v.is_empty()),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "config store lookup failed, falling back");
                None
            }
        }
    }

    /// Resolve a category through the four-tier chain; never fails
    pub async fn resolve(&self, category: ImageCategory) -> String {
        if let Some(value) = self.env_override(&category.env_var()) {
            return value;
        }

        if let Some(value) = self.stored_value(&category.storage_key()).await {
            return value;
        }

        if let Some(url) = category.remote_fallback() {
            if !url.is_empty() {
                return url.to_string();
            }
        }

        category.local_default().to_string()
    }

    /// Resolve a category given by name, as received over HTTP.
    ///
    /// Known names go through the typed chain. Unknown names still honor
    /// the environment and store tiers under the derived naming
    /// convention, then land on the placeholder, since the fallback
    /// table has no entry for them.
    pub async fn resolve_name(&self, name: &str) -> String {
        match name.parse::<ImageCategory>() {
            Ok(category) => self.resolve(category).await,
            Err(_) => {
                let env_var = format!("IMAGE_{}_URL", name.to_ascii_uppercase());
                if let Some(value) = self.env_override(&env_var) {
                    return value;
                }
                if let Some(value) = self.stored_value(&format!("image_{}_url", name)).await {
                    return value;
                }
                PLACEHOLDER_IMAGE_PATH.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use vitrine_persistence::{ConfigEntryData, MemoryConfigStore, NewConfigEntry};

    use super::*;

    /// Environment fixture backed by a map
    struct MapEnv(HashMap<String, String>);

    impl MapEnv {
        fn of(pairs: &[(&str, &str)]) -> Arc<Self> {
            Arc::new(MapEnv(
                pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ))
        }
    }

    impl EnvReader for MapEnv {
        fn get(&self, name: &str) -> Option<String> {
            self.0.get(name).cloned()
        }
    }

    /// Store double whose every call fails
    struct FailingStore;

    #[async_trait]
    impl ConfigStore for FailingStore {
        async fn find_one(&self, _key: &str) -> anyhow::Result<Option<ConfigEntryData>> {
            anyhow::bail!("store unavailable")
        }

        async fn find_all(&self) -> anyhow::Result<Vec<ConfigEntryData>> {
            anyhow::bail!("store unavailable")
        }

        async fn upsert(
            &self,
            key: &str,
            _value: &str,
            _description: Option<&str>,
        ) -> anyhow::Result<ConfigEntryData> {
            anyhow::bail!("write failed for {key}")
        }

        async fn insert_missing(&self, _entries: &[NewConfigEntry]) -> anyhow::Result<usize> {
            anyhow::bail!("store unavailable")
        }
    }

    fn resolver_with(store: Arc<dyn ConfigStore>, env: Arc<dyn EnvReader>) -> ImageResolver {
        ImageResolver::with_env(store, env)
    }

    #[tokio::test]
    async fn test_env_override_wins_over_store() {
        let store = Arc::new(MemoryConfigStore::new());
        store
            .upsert("image_banner_url", "https://db.example/banner.png", None)
            .await
            .unwrap();

        let resolver = resolver_with(
            store,
            MapEnv::of(&[("IMAGE_BANNER_URL", "https://example.test/b.png")]),
        );

        assert_eq!(
            resolver.resolve(ImageCategory::Banner).await,
            "https://example.test/b.png"
        );
    }

    #[tokio::test]
    async fn test_empty_env_override_is_ignored() {
        let store = Arc::new(MemoryConfigStore::new());
        store
            .upsert("image_logo_url", "https://db.example/logo.png", None)
            .await
            .unwrap();

        let resolver = resolver_with(store, MapEnv::of(&[("IMAGE_LOGO_URL", "")]));

        assert_eq!(
            resolver.resolve(ImageCategory::Logo).await,
            "https://db.example/logo.png"
        );
    }

    #[tokio::test]
    async fn test_store_value_wins_over_remote_fallback() {
        let store = Arc::new(MemoryConfigStore::new());
        store
            .upsert("image_logo_url", "https://db.example/logo.png", None)
            .await
            .unwrap();

        let resolver = resolver_with(store, MapEnv::of(&[]));

        assert_eq!(
            resolver.resolve(ImageCategory::Logo).await,
            "https://db.example/logo.png"
        );
    }

    #[tokio::test]
    async fn test_empty_store_value_falls_through() {
        let store = Arc::new(MemoryConfigStore::new());
        store.upsert("image_logo_url", "", None).await.unwrap();

        let resolver = resolver_with(store, MapEnv::of(&[]));

        assert_eq!(
            resolver.resolve(ImageCategory::Logo).await,
            ImageCategory::Logo.remote_fallback().unwrap()
        );
    }

    #[tokio::test]
    async fn test_empty_store_returns_remote_fallback() {
        let resolver = resolver_with(Arc::new(MemoryConfigStore::new()), MapEnv::of(&[]));

        assert_eq!(
            resolver.resolve(ImageCategory::Logo).await,
            "https://website-majorjayant.s3.eu-north-1.amazonaws.com/Logo"
        );
    }

    #[tokio::test]
    async fn test_failing_store_degrades_to_remote_fallback() {
        let resolver = resolver_with(Arc::new(FailingStore), MapEnv::of(&[]));

        assert_eq!(
            resolver.resolve(ImageCategory::AboutPhoto2).await,
            ImageCategory::AboutPhoto2.remote_fallback().unwrap()
        );
    }

    #[tokio::test]
    async fn test_env_override_wins_even_when_store_fails() {
        let resolver = resolver_with(
            Arc::new(FailingStore),
            MapEnv::of(&[("IMAGE_FAVICON_URL", "https://cdn.example/fav.ico")]),
        );

        assert_eq!(
            resolver.resolve(ImageCategory::Favicon).await,
            "https://cdn.example/fav.ico"
        );
    }

    #[tokio::test]
    async fn test_resolve_name_known_category() {
        let resolver = resolver_with(Arc::new(MemoryConfigStore::new()), MapEnv::of(&[]));

        assert_eq!(
            resolver.resolve_name("logo").await,
            "https://website-majorjayant.s3.eu-north-1.amazonaws.com/Logo"
        );
    }

    #[tokio::test]
    async fn test_resolve_name_unknown_category_lands_on_placeholder() {
        let resolver = resolver_with(Arc::new(MemoryConfigStore::new()), MapEnv::of(&[]));

        assert_eq!(resolver.resolve_name("hero").await, PLACEHOLDER_IMAGE_PATH);
    }

    #[tokio::test]
    async fn test_resolve_name_unknown_category_honors_env_and_store() {
        let store = Arc::new(MemoryConfigStore::new());
        store
            .upsert("image_hero_url", "https://db.example/hero.png", None)
            .await
            .unwrap();

        let resolver = resolver_with(store.clone(), MapEnv::of(&[]));
        assert_eq!(
            resolver.resolve_name("hero").await,
            "https://db.example/hero.png"
        );

        let resolver = resolver_with(
            store,
            MapEnv::of(&[("IMAGE_HERO_URL", "https://cdn.example/hero.png")]),
        );
        assert_eq!(
            resolver.resolve_name("hero").await,
            "https://cdn.example/hero.png"
        );
    }

    #[tokio::test]
    async fn test_env_does_not_affect_raw_store_round_trip() {
        let store = Arc::new(MemoryConfigStore::new());
        store
            .upsert("image_banner_url", "https://db.example/banner.png", None)
            .await
            .unwrap();

        // The resolver prefers the override, the raw store is untouched.
        let resolver = resolver_with(
            store.clone(),
            MapEnv::of(&[("IMAGE_BANNER_URL", "https://example.test/b.png")]),
        );
        assert_eq!(
            resolver.resolve(ImageCategory::Banner).await,
            "https://example.test/b.png"
        );

        let raw = store.find_one("image_banner_url").await.unwrap().unwrap();
        assert_eq!(raw.value.as_deref(), Some("https://db.example/banner.png"));
    }
}
