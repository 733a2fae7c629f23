//! Gallery manifest types (`assets/gallery.json`).

use serde::{Deserialize, Serialize};

/// Category assigned to entries that do not declare one.
pub const DEFAULT_CATEGORY: &str = "all";

/// Advisory media type tag from the manifest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    /// Any other tag; the file extension decides.
    #[serde(other)]
    Other,
}

/// Root manifest structure.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Manifest {
    /// Gallery entries in display order. A missing key reads as empty.
    #[serde(default)]
    pub items: Vec<ManifestEntry>,
}

/// A single gallery entry as published in the manifest.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ManifestEntry {
    /// Asset path relative to the site root
    pub src: String,
    /// Alternative text
    #[serde(default)]
    pub alt: String,
    /// Filter category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Advisory media type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    /// Highlighted on the landing page
    #[serde(default)]
    pub featured: bool,
}

impl ManifestEntry {
    /// Create an entry with only a source and alt text.
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            category: None,
            media_type: None,
            featured: false,
        }
    }

    /// Builder-style helper to set the advisory type tag.
    pub fn with_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    /// Builder-style helper to set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Category, falling back to [`DEFAULT_CATEGORY`].
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_manifest() {
        let json = r#"{
            "items": [
                {
                    "src": "assets/gallery/sunset.jpg",
                    "alt": "Sunset",
                    "category": "landscape",
                    "featured": true
                },
                { "src": "assets/gallery/flyover.mp4", "alt": "Flyover", "type": "video" }
            ]
        }"#;

        let manifest: Manifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.items.len(), 2);
        assert_eq!(manifest.items[0].category(), "landscape");
        assert!(manifest.items[0].featured);
        assert_eq!(manifest.items[1].media_type, Some(MediaType::Video));
        assert_eq!(manifest.items[1].category(), DEFAULT_CATEGORY);
    }

    #[test]
    fn test_missing_items_is_empty() {
        let manifest: Manifest = serde_json::from_str("{}").unwrap();
        assert!(manifest.items.is_empty());
    }

    #[test]
    fn test_unknown_type_tag() {
        let json = r#"{ "items": [{ "src": "a.gif", "alt": "A", "type": "animation" }] }"#;
        let manifest: Manifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.items[0].media_type, Some(MediaType::Other));
    }

    #[test]
    fn test_items_must_be_array() {
        assert!(serde_json::from_str::<Manifest>(r#"{ "items": "nope" }"#).is_err());
    }
}
