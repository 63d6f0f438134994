//! Image category table
//!
//! Every image slot on the site is one of a closed set of categories.
//! Each category derives its storage key, its environment override
//! variable, and its per-tier fallback values from this table, so an
//! unknown category cannot be constructed past the string boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use vitrine_common::VitrineError;

/// Backstop path served when no tier yields a usable value
pub const PLACEHOLDER_IMAGE_PATH: &str = "/static/img/placeholder.png";

/// Logical image slots on the site
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageCategory {
    Favicon,
    Logo,
    Banner,
    AboutProfile,
    AboutPhoto1,
    AboutPhoto2,
    AboutPhoto3,
    AboutPhoto4,
}

impl ImageCategory {
    pub const ALL: [ImageCategory; 8] = [
        ImageCategory::Favicon,
        ImageCategory::Logo,
        ImageCategory::Banner,
        ImageCategory::AboutProfile,
        ImageCategory::AboutPhoto1,
        ImageCategory::AboutPhoto2,
        ImageCategory::AboutPhoto3,
        ImageCategory::AboutPhoto4,
    ];

    /// The four about-section photo slots, in display order
    pub const ABOUT_PHOTOS: [ImageCategory; 4] = [
        ImageCategory::AboutPhoto1,
        ImageCategory::AboutPhoto2,
        ImageCategory::AboutPhoto3,
        ImageCategory::AboutPhoto4,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageCategory::Favicon => "favicon",
            ImageCategory::Logo => "logo",
            ImageCategory::Banner => "banner",
            ImageCategory::AboutProfile => "about_profile",
            ImageCategory::AboutPhoto1 => "about_photo1",
            ImageCategory::AboutPhoto2 => "about_photo2",
            ImageCategory::AboutPhoto3 => "about_photo3",
            ImageCategory::AboutPhoto4 => "about_photo4",
        }
    }

    /// Canonical store key for this category
    pub fn storage_key(&self) -> String {
        format!("image_{}_url", self.as_str())
    }

    /// Deployment-time override variable for this category
    pub fn env_var(&self) -> String {
        format!("IMAGE_{}_URL", self.as_str().to_ascii_uppercase())
    }

    /// Known-good remote asset for this category, tier 3 of the chain
    pub fn remote_fallback(&self) -> Option<&'static str> {
        match self {
            ImageCategory::Favicon => {
                Some("https://website-majorjayant.s3.eu-north-1.amazonaws.com/FavIcon")
            }
            ImageCategory::Logo => {
                Some("https://website-majorjayant.s3.eu-north-1.amazonaws.com/Logo")
            }
            ImageCategory::Banner => {
                Some("https://website-majorjayant.s3.eu-north-1.amazonaws.com/Banner")
            }
            ImageCategory::AboutProfile => Some(
                "https://website-majorjayant.s3.eu-north-1.amazonaws.com/profilephoto+(2).svg",
            ),
            ImageCategory::AboutPhoto1 => {
                Some("https://website-majorjayant.s3.eu-north-1.amazonaws.com/about_photo1.jpg")
            }
            ImageCategory::AboutPhoto2 => {
                Some("https://website-majorjayant.s3.eu-north-1.amazonaws.com/about_photo2.jpg")
            }
            ImageCategory::AboutPhoto3 => {
                Some("https://website-majorjayant.s3.eu-north-1.amazonaws.com/about_photo3.jpg")
            }
            ImageCategory::AboutPhoto4 => {
                Some("https://website-majorjayant.s3.eu-north-1.amazonaws.com/about_photo4.jpg")
            }
        }
    }

    /// Tier-4 backstop path
    pub fn local_default(&self) -> &'static str {
        match self {
            ImageCategory::Favicon => "/static/img/favicon.png",
            ImageCategory::Logo => "/static/img/logo.png",
            ImageCategory::Banner => "/static/img/banner_latest.png",
            _ => PLACEHOLDER_IMAGE_PATH,
        }
    }
}

impl fmt::Display for ImageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageCategory {
    type Err = VitrineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| VitrineError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for category in ImageCategory::ALL {
            assert_eq!(category.as_str().parse::<ImageCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!("hero".parse::<ImageCategory>().is_err());
        assert!("".parse::<ImageCategory>().is_err());
        assert!("Logo".parse::<ImageCategory>().is_err());
    }

    #[test]
    fn test_storage_key_convention() {
        assert_eq!(ImageCategory::Logo.storage_key(), "image_logo_url");
        assert_eq!(
            ImageCategory::AboutPhoto2.storage_key(),
            "image_about_photo2_url"
        );
    }

    #[test]
    fn test_env_var_convention() {
        assert_eq!(ImageCategory::Banner.env_var(), "IMAGE_BANNER_URL");
        assert_eq!(
            ImageCategory::AboutPhoto1.env_var(),
            "IMAGE_ABOUT_PHOTO1_URL"
        );
    }

    #[test]
    fn test_every_category_has_a_remote_fallback() {
        for category in ImageCategory::ALL {
            let url = category.remote_fallback().unwrap();
            assert!(url.starts_with("https://"));
        }
    }

    #[test]
    fn test_local_defaults() {
        assert_eq!(ImageCategory::Favicon.local_default(), "/static/img/favicon.png");
        assert_eq!(ImageCategory::Banner.local_default(), "/static/img/banner_latest.png");
        assert_eq!(
            ImageCategory::AboutPhoto3.local_default(),
            PLACEHOLDER_IMAGE_PATH
        );
    }
}
