//! About-section content aggregation
//!
//! Composes the about object from several independently resolved keys.
//! Text fields come straight from the store with literal defaults; photo
//! URLs go through the full four-tier resolver. Each field falls back on
//! its own, so the result is always a complete object.

use std::sync::Arc;

use vitrine_persistence::ConfigStore;

use crate::category::{ImageCategory, PLACEHOLDER_IMAGE_PATH};
use crate::env::EnvReader;
use crate::model::{
    AboutContent, AboutPhoto, DEFAULT_ABOUT_DESCRIPTION, DEFAULT_ABOUT_SUBTITLE,
    DEFAULT_ABOUT_TITLE, default_photo_alt,
};
use crate::resolver::ImageResolver;

/// Legacy writers encoded store failures into the value itself with this
/// prefix; such values must never reach rendered output.
pub const ERROR_SENTINEL_PREFIX: &str = "Error:";

/// Builds the composite about-section content object
#[derive(Clone)]
pub struct ContentAggregator {
    store: Arc<dyn ConfigStore>,
    resolver: ImageResolver,
}

impl ContentAggregator {
    /// Create an aggregator reading overrides from the process environment
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        let resolver = ImageResolver::new(store.clone());
        Self { store, resolver }
    }

    /// Create an aggregator with an explicit environment source
    pub fn with_env(store: Arc<dyn ConfigStore>, env: Arc<dyn EnvReader>) -> Self {
        let resolver = ImageResolver::with_env(store.clone(), env);
        Self { store, resolver }
    }

    /// Single-tier store lookup with a literal default
    async fn text_value(&self, key: &str, default: &str) -> String {
        match self.store.find_one(key).await {
            Ok(Some(entry)) => match entry.value {
                Some(v) if !v.is_empty() => v,
                _ => default.to_string(),
            },
            Ok(None) => default.to_string(),
            Err(e) => {
                tracing::warn!(key, error = %e, "config store lookup failed, using default");
                default.to_string()
            }
        }
    }

    /// Replace absent or sentinel-carrying URLs with the placeholder
    fn scrub_url(url: String) -> String {
        if url.is_empty() || url.starts_with(ERROR_SENTINEL_PREFIX) {
            PLACEHOLDER_IMAGE_PATH.to_string()
        } else {
            url
        }
    }

    /// Build the about content object; never fails, never partial
    pub async fn about_content(&self) -> AboutContent {
        let title = self.text_value("about_title", DEFAULT_ABOUT_TITLE).await;
        let subtitle = self
            .text_value("about_subtitle", DEFAULT_ABOUT_SUBTITLE)
            .await;
        let description = self
            .text_value("about_description", DEFAULT_ABOUT_DESCRIPTION)
            .await;

        let profile_image =
            Self::scrub_url(self.resolver.resolve(ImageCategory::AboutProfile).await);

        let mut photos = Vec::with_capacity(ImageCategory::ABOUT_PHOTOS.len());
        for (i, category) in ImageCategory::ABOUT_PHOTOS.into_iter().enumerate() {
            let slot = i + 1;
            let url = Self::scrub_url(self.resolver.resolve(category).await);
            let alt = self
                .text_value(&format!("about_photo{}_alt", slot), &default_photo_alt(slot))
                .await;
            photos.push(AboutPhoto { url, alt });
        }

        AboutContent {
            title,
            subtitle,
            description,
            profile_image,
            photos,
        }
    }
}
