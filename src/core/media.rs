//! Media classification for gallery entries.
//!
//! Decides whether a manifest entry is an image or a video and derives the
//! companion asset paths: the poster frame for videos and the WebP /
//! same-format fallback chain for images. Pure functions only; nothing here
//! checks that the derived files exist.

use crate::models::{ManifestEntry, MediaType};

/// Extensions recognized as video.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "webm", "ogg"];

/// Extensions stripped from image sources to build the base path.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Extensions that can serve as the same-format fallback source.
const FALLBACK_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Media kind after classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// One candidate in a `<picture>` fallback chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceCandidate {
    pub srcset: String,
    pub mime: &'static str,
}

/// A manifest entry annotated with its kind and derived paths.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassifiedItem {
    pub src: String,
    pub alt: String,
    pub kind: MediaKind,
    /// Poster frame for videos with a recognized extension
    pub poster_path: Option<String>,
    /// `src` without its recognized extension
    pub base_path: String,
    pub category: String,
}

/// Extension of the last path segment, if any.
fn extension(src: &str) -> Option<&str> {
    let (_, ext) = src.rsplit_once('.')?;
    (!ext.is_empty() && !ext.contains('/')).then_some(ext)
}

/// Find `src`'s extension among `allowed`, ignoring ASCII case.
fn matching_extension<'a>(src: &'a str, allowed: &[&str]) -> Option<&'a str> {
    extension(src).filter(|ext| allowed.iter().any(|a| ext.eq_ignore_ascii_case(a)))
}

/// Strip a trailing extension from `allowed`; otherwise return `src` as is.
fn strip_extension<'a>(src: &'a str, allowed: &[&str]) -> &'a str {
    match matching_extension(src, allowed) {
        Some(ext) => &src[..src.len() - ext.len() - 1],
        None => src,
    }
}

/// Whether an entry should be rendered as a video.
///
/// The type tag wins when it says video; otherwise the extension decides.
pub fn is_video(entry: &ManifestEntry) -> bool {
    entry.media_type == Some(MediaType::Video)
        || matching_extension(&entry.src, VIDEO_EXTENSIONS).is_some()
}

/// Classify a manifest entry.
pub fn classify(entry: &ManifestEntry) -> ClassifiedItem {
    let kind = if is_video(entry) {
        MediaKind::Video
    } else {
        MediaKind::Image
    };

    let (base_path, poster_path) = match kind {
        MediaKind::Video => {
            let base = strip_extension(&entry.src, VIDEO_EXTENSIONS);
            let poster = (base.len() != entry.src.len()).then(|| format!("{}.jpg", base));
            (base.to_string(), poster)
        }
        MediaKind::Image => (strip_extension(&entry.src, IMAGE_EXTENSIONS).to_string(), None),
    };

    ClassifiedItem {
        src: entry.src.clone(),
        alt: entry.alt.clone(),
        kind,
        poster_path,
        base_path,
        category: entry.category().to_string(),
    }
}

/// MIME type for a fallback extension.
fn image_mime(ext: &str) -> &'static str {
    if ext.eq_ignore_ascii_case("png") {
        "image/png"
    } else {
        "image/jpeg"
    }
}

impl ClassifiedItem {
    /// Whether the source carried a recognized image extension, which is
    /// what makes a sibling WebP variant addressable.
    pub fn has_webp_variant(&self) -> bool {
        self.kind == MediaKind::Image && self.base_path.len() != self.src.len()
    }

    /// Ordered `<picture>` sources, most preferred first.
    ///
    /// WebP always precedes the same-format fallback. Without a recognized
    /// extension the only candidate is `src` itself, typed as JPEG.
    pub fn image_sources(&self) -> Vec<SourceCandidate> {
        if !self.has_webp_variant() {
            return vec![SourceCandidate {
                srcset: self.src.clone(),
                mime: "image/jpeg",
            }];
        }

        let fallback_ext = matching_extension(&self.src, FALLBACK_EXTENSIONS).unwrap_or("jpg");
        vec![
            SourceCandidate {
                srcset: format!("{}.webp", self.base_path),
                mime: "image/webp",
            },
            SourceCandidate {
                srcset: format!("{}.{}", self.base_path, fallback_ext),
                mime: image_mime(fallback_ext),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_by_extension() {
        let item = classify(&ManifestEntry::new("clip.mp4", "Clip"));
        assert_eq!(item.kind, MediaKind::Video);
        assert_eq!(item.base_path, "clip");
        assert_eq!(item.poster_path.as_deref(), Some("clip.jpg"));
    }

    #[test]
    fn test_video_extension_case_insensitive() {
        for src in ["a/b.MOV", "a/b.WebM", "a/b.ogg"] {
            let item = classify(&ManifestEntry::new(src, ""));
            assert_eq!(item.kind, MediaKind::Video, "{}", src);
            assert_eq!(item.poster_path.as_deref(), Some("a/b.jpg"));
        }
    }

    #[test]
    fn test_video_by_type_tag() {
        let entry = ManifestEntry::new("stream/flyover", "Flyover").with_type(MediaType::Video);
        let item = classify(&entry);
        assert_eq!(item.kind, MediaKind::Video);
        assert_eq!(item.base_path, "stream/flyover");
        assert_eq!(item.poster_path, None);
    }

    #[test]
    fn test_image_type_tag_does_not_override_video_extension() {
        let entry = ManifestEntry::new("clip.mp4", "").with_type(MediaType::Image);
        assert_eq!(classify(&entry).kind, MediaKind::Video);
    }

    #[test]
    fn test_image_sources_webp_first() {
        let item = classify(&ManifestEntry::new("photo.JPG", "Photo"));
        assert_eq!(item.kind, MediaKind::Image);
        assert_eq!(item.base_path, "photo");

        let sources = item.image_sources();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].srcset, "photo.webp");
        assert_eq!(sources[0].mime, "image/webp");
        assert_eq!(sources[1].srcset, "photo.JPG");
        assert_eq!(sources[1].mime, "image/jpeg");
    }

    #[test]
    fn test_png_fallback_keeps_format() {
        let sources = classify(&ManifestEntry::new("assets/map.png", "")).image_sources();
        assert_eq!(sources[0].srcset, "assets/map.webp");
        assert_eq!(sources[1].srcset, "assets/map.png");
        assert_eq!(sources[1].mime, "image/png");
    }

    #[test]
    fn test_webp_source_falls_back_to_jpg() {
        let sources = classify(&ManifestEntry::new("hero.webp", "")).image_sources();
        assert_eq!(sources[0].srcset, "hero.webp");
        assert_eq!(sources[1].srcset, "hero.jpg");
        assert_eq!(sources[1].mime, "image/jpeg");
    }

    #[test]
    fn test_unrecognized_extension() {
        let item = classify(&ManifestEntry::new("assets/raw/frame", "Frame"));
        assert_eq!(item.kind, MediaKind::Image);
        assert_eq!(item.base_path, "assets/raw/frame");
        assert!(!item.has_webp_variant());

        let sources = item.image_sources();
        assert_eq!(
            sources,
            vec![SourceCandidate {
                srcset: "assets/raw/frame".to_string(),
                mime: "image/jpeg",
            }]
        );
    }

    #[test]
    fn test_dot_in_directory_is_not_an_extension() {
        let item = classify(&ManifestEntry::new("assets/v1.2/frame", ""));
        assert_eq!(item.base_path, "assets/v1.2/frame");
        assert!(!item.has_webp_variant());
    }

    #[test]
    fn test_category_defaults_to_all() {
        assert_eq!(classify(&ManifestEntry::new("a.jpg", "")).category, "all");
        let entry = ManifestEntry::new("a.jpg", "").with_category("real-estate");
        assert_eq!(classify(&entry).category, "real-estate");
    }
}
