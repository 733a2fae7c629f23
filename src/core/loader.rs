//! Gallery manifest loading.
//!
//! `Idle → Fetching → {Rendered | Failed}`. The loader fetches the manifest
//! through a [`ManifestSource`], classifies and renders every entry, and
//! reports the outcome as a [`LoadState`]. Failures are terminal for the
//! attempt: they are logged once and turned into [`LoadState::Failed`],
//! never returned to the caller as errors.

use super::error::FetchError;
use super::lightbox::LightboxItem;
use super::media::{ClassifiedItem, MediaKind, classify};
use super::render::{GalleryNode, RenderOptions, render};
use crate::models::Manifest;

/// Anything that can produce the gallery manifest for a URL.
#[allow(async_fn_in_trait)]
pub trait ManifestSource {
    async fn fetch_manifest(&self, url: &str) -> Result<Manifest, FetchError>;
}

/// A successfully rendered gallery.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Gallery {
    pub items: Vec<ClassifiedItem>,
    pub nodes: Vec<GalleryNode>,
}

impl Gallery {
    /// Item list handed to the lightbox.
    pub fn lightbox_items(&self) -> Vec<LightboxItem> {
        self.items.iter().map(LightboxItem::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Gallery load state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Fetching,
    Rendered(Gallery),
    Failed(FetchError),
}

impl LoadState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Loads and renders the gallery manifest.
pub struct GalleryLoader<S> {
    source: S,
    manifest_path: String,
    cache_bust: bool,
    options: RenderOptions,
}

impl<S: ManifestSource> GalleryLoader<S> {
    pub fn new(source: S, manifest_path: impl Into<String>) -> Self {
        Self {
            source,
            manifest_path: manifest_path.into(),
            cache_bust: true,
            options: RenderOptions::default(),
        }
    }

    pub fn with_cache_bust(mut self, enabled: bool) -> Self {
        self.cache_bust = enabled;
        self
    }

    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Manifest URL, with a `v=<now_ms>` query when cache busting is on.
    pub fn manifest_url(&self, now_ms: f64) -> String {
        if !self.cache_bust {
            return self.manifest_path.clone();
        }
        let sep = if self.manifest_path.contains('?') { '&' } else { '?' };
        format!("{}{}v={}", self.manifest_path, sep, now_ms as u64)
    }

    /// Fetch, classify and render. Always ends in `Rendered` or `Failed`.
    pub async fn load(&self, now_ms: f64) -> LoadState {
        let url = self.manifest_url(now_ms);
        log::debug!("Fetching gallery from: {}", url);

        match self.source.fetch_manifest(&url).await {
            Ok(manifest) => LoadState::Rendered(self.build(&manifest)),
            Err(err) => {
                log::error!("Error loading gallery: {}", err);
                LoadState::Failed(err)
            }
        }
    }

    /// Classify and render a manifest that is already in hand.
    pub fn build(&self, manifest: &Manifest) -> Gallery {
        log::info!("Loaded {} gallery items", manifest.items.len());

        let items: Vec<ClassifiedItem> = manifest
            .items
            .iter()
            .map(classify)
            .inspect(|item| {
                let kind = match item.kind {
                    MediaKind::Video => "video",
                    MediaKind::Image => "image",
                };
                log::debug!("Gallery item {} ({})", item.src, kind);
            })
            .collect();
        let nodes = render(&items, &self.options);

        Gallery { items, nodes }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::core::render::MediaNode;
    use crate::core::testing;
    use crate::models::ManifestEntry;

    /// Serves a fixed response and records requested URLs.
    struct StubSource {
        response: Result<Manifest, FetchError>,
        requests: RefCell<Vec<String>>,
    }

    impl StubSource {
        fn ok(entries: Vec<ManifestEntry>) -> Self {
            Self {
                response: Ok(Manifest { items: entries }),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn err(err: FetchError) -> Self {
            Self {
                response: Err(err),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl ManifestSource for StubSource {
        async fn fetch_manifest(&self, url: &str) -> Result<Manifest, FetchError> {
            self.requests.borrow_mut().push(url.to_string());
            self.response.clone()
        }
    }

    fn two_images() -> Vec<ManifestEntry> {
        vec![ManifestEntry::new("a.jpg", "A"), ManifestEntry::new("b.jpg", "B")]
    }

    #[tokio::test]
    async fn test_load_two_images() {
        let loader = GalleryLoader::new(StubSource::ok(two_images()), "assets/gallery.json");
        let LoadState::Rendered(gallery) = loader.load(1_700_000_000_000.0).await else {
            panic!("expected rendered gallery");
        };

        assert_eq!(gallery.nodes.len(), 2);
        assert_eq!(gallery.nodes[0].index, 0);
        assert_eq!(gallery.nodes[1].index, 1);
        assert!(matches!(gallery.nodes[0].media, MediaNode::Picture { .. }));
        assert_eq!(gallery.lightbox_items()[1].alt, "B");
    }

    #[tokio::test]
    async fn test_empty_manifest_is_not_an_error() {
        let loader = GalleryLoader::new(StubSource::ok(vec![]), "assets/gallery.json");
        match loader.load(0.0).await {
            LoadState::Rendered(gallery) => assert!(gallery.is_empty()),
            other => panic!("expected empty gallery, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_network_failure_logs_once() {
        testing::init_logger();
        testing::take_logs();

        let loader = GalleryLoader::new(
            StubSource::err(FetchError::NetworkError("Failed to fetch".into())),
            "assets/gallery.json",
        );
        let state = loader.load(0.0).await;

        assert_eq!(
            state,
            LoadState::Failed(FetchError::NetworkError("Failed to fetch".into()))
        );
        let errors: Vec<_> = testing::take_logs()
            .into_iter()
            .filter(|(level, _)| *level == log::Level::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].1.contains("Failed to fetch"));
    }

    #[tokio::test]
    async fn test_http_and_parse_failures() {
        for err in [
            FetchError::HttpError(404),
            FetchError::JsonParseError("expected value".into()),
        ] {
            let loader = GalleryLoader::new(StubSource::err(err.clone()), "assets/gallery.json");
            assert_eq!(loader.load(0.0).await, LoadState::Failed(err));
        }
    }

    #[tokio::test]
    async fn test_reload_is_idempotent() {
        let loader = GalleryLoader::new(StubSource::ok(two_images()), "assets/gallery.json");
        let first = loader.load(1.0).await;
        let second = loader.load(2.0).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_cache_busting_url() {
        let source = StubSource::ok(vec![]);
        let loader = GalleryLoader::new(source, "assets/gallery.json");
        loader.load(1_712_345_678_901.0).await;
        assert_eq!(
            loader.source.requests.borrow().as_slice(),
            ["assets/gallery.json?v=1712345678901"]
        );
    }

    #[test]
    fn test_manifest_url_variants() {
        let loader = GalleryLoader::new(StubSource::ok(vec![]), "gallery.json?lang=en");
        assert_eq!(loader.manifest_url(5.0), "gallery.json?lang=en&v=5");

        let loader = loader.with_cache_bust(false);
        assert_eq!(loader.manifest_url(5.0), "gallery.json?lang=en");
    }
}
