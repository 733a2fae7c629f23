//! Gallery section.
//!
//! Loads the manifest once the grid is mounted, renders one item per entry
//! and hands the item list to the lightbox.

use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::SiteContext;
use crate::components::icons as ic;
use crate::config::render_options;
use crate::core::{
    GALLERY_ERROR_MESSAGE, GalleryLoader, GalleryNode, Lightbox, LoadState, MediaNode,
};
use crate::utils::HttpManifestSource;
use crate::utils::dom;

#[component]
pub fn GallerySection() -> impl IntoView {
    let ctx = expect_context::<SiteContext>();
    let lightbox = ctx.lightbox;
    let config = ctx.config.clone();

    let state = RwSignal::new(LoadState::default());
    let grid_ref = NodeRef::<html::Div>::new();

    // Start loading as soon as the grid exists; later runs are no-ops
    Effect::new(move || {
        if grid_ref.get().is_none() || !state.with_untracked(LoadState::is_idle) {
            return;
        }
        state.set(LoadState::Fetching);

        let settings = config.gallery.clone();
        let options = render_options(&config);
        spawn_local(async move {
            let result = GalleryLoader::new(HttpManifestSource, settings.manifest_path)
                .with_cache_bust(settings.cache_bust)
                .with_render_options(options)
                .load(dom::now_ms())
                .await;

            if let LoadState::Rendered(gallery) = &result {
                lightbox.update(|lb| lb.bind(gallery.lightbox_items()));
            }
            state.set(result);
        });
    });

    view! {
        <section id="gallery" class="gallery">
            <div class="container">
                <h2 class="section-title">"OUR WORK"</h2>
                <GalleryGrid state=state lightbox=lightbox grid_ref=grid_ref />
            </div>
        </section>
    }
}

/// Grid container. Its children are replaced wholesale on every state
/// change: nothing while loading, one item per node once rendered, or a
/// single alert when loading failed.
#[component]
pub fn GalleryGrid(
    #[prop(into)] state: Signal<LoadState>,
    lightbox: RwSignal<Lightbox>,
    grid_ref: NodeRef<html::Div>,
) -> impl IntoView {
    view! {
        <div class="gallery-grid" node_ref=grid_ref>
            {move || match state.get() {
                LoadState::Rendered(gallery) => gallery
                    .nodes
                    .into_iter()
                    .map(|node| view! { <GalleryItem node=node lightbox=lightbox /> })
                    .collect_view()
                    .into_any(),
                LoadState::Failed(_) => view! {
                    <p class="error-message" role="alert" aria-live="polite">
                        {GALLERY_ERROR_MESSAGE}
                    </p>
                }
                .into_any(),
                LoadState::Idle | LoadState::Fetching => ().into_any(),
            }}
        </div>
    }
}

/// One grid cell: media plus hover overlay. Clicking opens the lightbox at
/// the item's position.
#[component]
fn GalleryItem(node: GalleryNode, lightbox: RwSignal<Lightbox>) -> impl IntoView {
    let index = node.index;
    let style = format!("opacity: 0; animation: {}", node.animation_style());

    let on_click = move |_| {
        lightbox.update(|lb| {
            if !lb.open(index) {
                log::warn!("Lightbox has no item at index {}", index);
            }
        });
    };

    view! {
        <div
            class="gallery-item"
            data-index=index.to_string()
            data-category=node.category
            style=style
            on:click=on_click
        >
            <GalleryMedia media=node.media />
            <div class="gallery-overlay">
                <span class="gallery-icon">
                    <Icon icon=ic::PLUS />
                </span>
            </div>
        </div>
    }
}

#[component]
fn GalleryMedia(media: MediaNode) -> impl IntoView {
    match media {
        MediaNode::Picture { sources, src, alt } => view! {
            <picture>
                {sources
                    .into_iter()
                    .map(|source| view! { <source srcset=source.srcset type=source.mime /> })
                    .collect_view()}
                <img src=src alt=alt loading="lazy" />
            </picture>
        }
        .into_any(),
        MediaNode::Video(video) => view! {
            <video
                src=video.src
                title=video.title.clone()
                aria-label=video.title
                poster=video.poster
                autoplay=video.autoplay
                muted=video.muted
                playsinline=video.plays_inline
                controls=video.controls
                preload=video.preload
            ></video>
        }
        .into_any(),
    }
}
