//! Content models and their literal defaults
//!
//! The defaults here are the same values the seeder writes on first run;
//! the aggregator falls back to them field by field when the store has
//! nothing usable.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ABOUT_TITLE: &str = "about.";
pub const DEFAULT_ABOUT_SUBTITLE: &str =
    "I'm a passionate product manager based in New Delhi, India.";
pub const DEFAULT_ABOUT_DESCRIPTION: &str = "Since 2015, I've enjoyed turning complex problems into simple, beautiful and intuitive designs. When I'm not coding or managing products, you'll find me cooking, playing video games or exploring new places.";

/// One about-section photo slot
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutPhoto {
    pub url: String,
    pub alt: String,
}

/// The composite about-section content object
///
/// Downstream rendering assumes every field is present; the aggregator
/// never produces a partial object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub profile_image: String,
    pub photos: Vec<AboutPhoto>,
}

/// Default alt text for an about photo slot (1-based)
pub fn default_photo_alt(slot: usize) -> String {
    format!("Personal photo {}", slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_photo_alt() {
        assert_eq!(default_photo_alt(1), "Personal photo 1");
        assert_eq!(default_photo_alt(4), "Personal photo 4");
    }

    #[test]
    fn test_about_content_serializes_camel_case() {
        let content = AboutContent {
            title: "t".to_string(),
            subtitle: "s".to_string(),
            description: "d".to_string(),
            profile_image: "/p.svg".to_string(),
            photos: vec![],
        };
        let json = serde_json::to_value(&content).unwrap();
        assert!(json.get("profileImage").is_some());
    }
}
