//! Vitrine Content - site content resolution engine
//!
//! This crate provides:
//! - `ImageCategory`: the closed set of image slots and their fallback tables
//! - `ImageResolver`: four-tier resolution (env > store > remote fallback > local default)
//! - `ContentAggregator`: composes resolved keys into the "about" content object
//! - `seed`: idempotent population of default configuration rows

pub mod about;
pub mod category;
pub mod env;
pub mod model;
pub mod resolver;
pub mod seed;

pub use about::ContentAggregator;
pub use category::{ImageCategory, PLACEHOLDER_IMAGE_PATH};
pub use env::{EnvReader, ProcessEnv};
pub use model::{AboutContent, AboutPhoto};
pub use resolver::ImageResolver;
pub use seed::seed_defaults;
