//! Gallery node construction.
//!
//! Turns classified items into a render model that the gallery component
//! maps one-to-one onto DOM nodes. Position in the output is the index the
//! lightbox navigates over, so order is preserved exactly.

use super::media::{ClassifiedItem, MediaKind, SourceCandidate};

/// Text of the accessible notice shown when the manifest cannot be loaded.
pub const GALLERY_ERROR_MESSAGE: &str = "Unable to load gallery images at this time.";

/// Fade-in timing applied to rendered items.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    /// Animation duration, in seconds
    pub animation_duration_s: f64,
    /// Extra delay per item index, in seconds
    pub stagger_delay_s: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            animation_duration_s: 0.5,
            stagger_delay_s: 0.1,
        }
    }
}

/// Attributes of a gallery `<video>` element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoNode {
    pub src: String,
    /// Title and accessible label
    pub title: String,
    pub poster: Option<String>,
    pub autoplay: bool,
    pub muted: bool,
    pub plays_inline: bool,
    pub controls: bool,
    pub preload: &'static str,
}

/// Media element inside a gallery item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaNode {
    /// `<picture>` with ordered sources and a plain `<img>` as last resort
    Picture {
        sources: Vec<SourceCandidate>,
        src: String,
        alt: String,
    },
    Video(VideoNode),
}

/// One rendered gallery item.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryNode {
    /// Zero-based position, also the lightbox index
    pub index: usize,
    pub category: String,
    pub media: MediaNode,
    /// Seconds before this item's fade-in starts
    pub animation_delay_s: f64,
    pub animation_duration_s: f64,
}

impl GalleryNode {
    /// CSS `animation` shorthand for the staggered fade-in.
    pub fn animation_style(&self) -> String {
        format!(
            "fadeInUp {}s ease forwards {}s",
            self.animation_duration_s, self.animation_delay_s
        )
    }
}

fn media_node(item: &ClassifiedItem) -> MediaNode {
    match item.kind {
        MediaKind::Video => MediaNode::Video(VideoNode {
            src: item.src.clone(),
            title: item.alt.clone(),
            poster: item.poster_path.clone(),
            autoplay: false,
            muted: true,
            plays_inline: true,
            controls: true,
            preload: "metadata",
        }),
        MediaKind::Image => MediaNode::Picture {
            sources: item.image_sources(),
            src: item.src.clone(),
            alt: item.alt.clone(),
        },
    }
}

/// Build one node per item, in input order.
pub fn render(items: &[ClassifiedItem], options: &RenderOptions) -> Vec<GalleryNode> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| GalleryNode {
            index,
            category: item.category.clone(),
            media: media_node(item),
            animation_delay_s: index as f64 * options.stagger_delay_s,
            animation_duration_s: options.animation_duration_s,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::media::classify;
    use crate::models::ManifestEntry;

    fn classified(entries: &[(&str, &str)]) -> Vec<ClassifiedItem> {
        entries
            .iter()
            .map(|(src, alt)| classify(&ManifestEntry::new(*src, *alt)))
            .collect()
    }

    #[test]
    fn test_two_images_indexed_in_order() {
        let nodes = render(
            &classified(&[("a.jpg", "A"), ("b.jpg", "B")]),
            &RenderOptions::default(),
        );

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].index, 0);
        assert_eq!(nodes[1].index, 1);
        assert_eq!(nodes[0].category, "all");
        match &nodes[1].media {
            MediaNode::Picture { sources, src, alt } => {
                assert_eq!(sources[0].srcset, "b.webp");
                assert_eq!(sources[1].srcset, "b.jpg");
                assert_eq!(src, "b.jpg");
                assert_eq!(alt, "B");
            }
            other => panic!("expected picture, got {:?}", other),
        }
    }

    #[test]
    fn test_video_attributes() {
        let nodes = render(&classified(&[("reel.mp4", "Reel")]), &RenderOptions::default());
        let MediaNode::Video(video) = &nodes[0].media else {
            panic!("expected video");
        };
        assert_eq!(video.src, "reel.mp4");
        assert_eq!(video.title, "Reel");
        assert_eq!(video.poster.as_deref(), Some("reel.jpg"));
        assert!(!video.autoplay);
        assert!(video.muted);
        assert!(video.plays_inline);
        assert_eq!(video.preload, "metadata");
    }

    #[test]
    fn test_mixed_media_keeps_input_order() {
        let nodes = render(
            &classified(&[("a.jpg", ""), ("b.mov", ""), ("c.png", "")]),
            &RenderOptions::default(),
        );
        assert!(matches!(nodes[0].media, MediaNode::Picture { .. }));
        assert!(matches!(nodes[1].media, MediaNode::Video(_)));
        assert!(matches!(nodes[2].media, MediaNode::Picture { .. }));
        assert_eq!(nodes.iter().map(|n| n.index).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_staggered_animation() {
        let options = RenderOptions {
            animation_duration_s: 0.5,
            stagger_delay_s: 0.25,
        };
        let nodes = render(&classified(&[("a.jpg", ""), ("b.jpg", ""), ("c.jpg", "")]), &options);
        assert_eq!(nodes[0].animation_style(), "fadeInUp 0.5s ease forwards 0s");
        assert_eq!(nodes[2].animation_style(), "fadeInUp 0.5s ease forwards 0.5s");
    }

    #[test]
    fn test_empty_input() {
        assert!(render(&[], &RenderOptions::default()).is_empty());
    }
}
