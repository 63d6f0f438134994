//! Bootstrap seeding of default configuration rows
//!
//! On first run the store is populated with a fixed set of defaults so
//! the lower resolution tiers have sensible starting content. Seeding is
//! idempotent: a key that already exists is never overwritten, so
//! operator edits survive restarts.

use vitrine_persistence::{ConfigStore, NewConfigEntry};

use crate::model::{DEFAULT_ABOUT_DESCRIPTION, DEFAULT_ABOUT_SUBTITLE, DEFAULT_ABOUT_TITLE};

/// Default key/value/description triples written on first run
pub const SEED_ENTRIES: &[NewConfigEntry] = &[
    // Site images
    NewConfigEntry {
        key: "image_favicon_url",
        value: "https://website-majorjayant.s3.eu-north-1.amazonaws.com/FavIcon",
        description: "Favicon URL",
    },
    NewConfigEntry {
        key: "image_logo_url",
        value: "https://website-majorjayant.s3.eu-north-1.amazonaws.com/Logo",
        description: "Logo URL",
    },
    NewConfigEntry {
        key: "image_banner_url",
        value: "https://website-majorjayant.s3.eu-north-1.amazonaws.com/Banner",
        description: "Banner URL",
    },
    // About section content
    NewConfigEntry {
        key: "about_title",
        value: DEFAULT_ABOUT_TITLE,
        description: "About section title",
    },
    NewConfigEntry {
        key: "about_subtitle",
        value: DEFAULT_ABOUT_SUBTITLE,
        description: "About section subtitle",
    },
    NewConfigEntry {
        key: "about_description",
        value: DEFAULT_ABOUT_DESCRIPTION,
        description: "About section description",
    },
    // About section images
    NewConfigEntry {
        key: "image_about_profile_url",
        value: "https://website-majorjayant.s3.eu-north-1.amazonaws.com/profilephoto+(2).svg",
        description: "About profile image URL",
    },
    NewConfigEntry {
        key: "image_about_photo1_url",
        value: "https://website-majorjayant.s3.eu-north-1.amazonaws.com/about_photo1.jpg",
        description: "About photo 1 URL",
    },
    NewConfigEntry {
        key: "image_about_photo2_url",
        value: "https://website-majorjayant.s3.eu-north-1.amazonaws.com/about_photo2.jpg",
        description: "About photo 2 URL",
    },
    NewConfigEntry {
        key: "image_about_photo3_url",
        value: "https://website-majorjayant.s3.eu-north-1.amazonaws.com/about_photo3.jpg",
        description: "About photo 3 URL",
    },
    NewConfigEntry {
        key: "image_about_photo4_url",
        value: "https://website-majorjayant.s3.eu-north-1.amazonaws.com/about_photo4.jpg",
        description: "About photo 4 URL",
    },
    // About photo alt text
    NewConfigEntry {
        key: "about_photo1_alt",
        value: "Personal photo 1",
        description: "Alt text for about photo 1",
    },
    NewConfigEntry {
        key: "about_photo2_alt",
        value: "Personal photo 2",
        description: "Alt text for about photo 2",
    },
    NewConfigEntry {
        key: "about_photo3_alt",
        value: "Personal photo 3",
        description: "Alt text for about photo 3",
    },
    NewConfigEntry {
        key: "about_photo4_alt",
        value: "Personal photo 4",
        description: "Alt text for about photo 4",
    },
];

/// Populate missing defaults; returns how many rows were inserted
pub async fn seed_defaults(store: &dyn ConfigStore) -> anyhow::Result<usize> {
    let inserted = store.insert_missing(SEED_ENTRIES).await?;

    tracing::info!(
        inserted,
        total = SEED_ENTRIES.len(),
        "site configuration defaults seeded"
    );

    Ok(inserted)
}
