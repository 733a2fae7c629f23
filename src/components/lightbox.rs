//! Full-screen lightbox overlay.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::{JsFuture, spawn_local};

use crate::app::SiteContext;
use crate::components::icons as ic;
use crate::core::{Lightbox, LightboxKey, MediaKind};

#[component]
pub fn LightboxOverlay() -> impl IntoView {
    let lightbox = expect_context::<SiteContext>().lightbox;
    let video_ref = NodeRef::<html::Video>::new();

    let is_open = Memo::new(move |_| lightbox.with(Lightbox::is_open));
    let frame = Memo::new(move |_| lightbox.with(Lightbox::frame));

    let image = Memo::new(move |_| {
        frame
            .get()
            .filter(|f| f.item.kind == MediaKind::Image)
            .map(|f| f.item)
    });
    let video_cue = Memo::new(move |_| lightbox.with(Lightbox::video_cue));

    // Keyboard navigation only while open
    let keydown = window_event_listener(ev::keydown, move |ev| {
        if !is_open.get_untracked() {
            return;
        }
        if let Some(key) = LightboxKey::from_key(&ev.key()) {
            ev.prevent_default();
            lightbox.update(|lb| {
                lb.handle_key(key);
            });
        }
    });
    on_cleanup(move || keydown.remove());

    // Play the current video; otherwise stop and release the stream
    Effect::new(move || {
        let cue = video_cue.get();
        let Some(video) = video_ref.get() else {
            return;
        };
        match cue {
            Some((_, src)) => {
                video.set_src(&src);
                if let Ok(promise) = video.play() {
                    spawn_local(async move {
                        if let Err(e) = JsFuture::from(promise).await {
                            log::debug!("Lightbox video did not autoplay: {:?}", e);
                        }
                    });
                }
            }
            None => {
                let _ = video.pause();
                let _ = video.remove_attribute("src");
                video.load();
            }
        }
    });

    let close = move || lightbox.update(Lightbox::close);

    // Only a click on the backdrop itself closes
    let on_backdrop = move |ev: ev::MouseEvent| {
        if ev.target() == ev.current_target() {
            close();
        }
    };

    view! {
        <div
            id="lightbox"
            class="lightbox"
            class:active=move || is_open.get()
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=on_backdrop
        >
            <button
                class="lightbox-close"
                aria-label="Close"
                on:click=move |ev: ev::MouseEvent| {
                    ev.stop_propagation();
                    close();
                }
            >
                <Icon icon=ic::CLOSE />
            </button>
            <button
                class="lightbox-prev"
                aria-label="Previous"
                on:click=move |ev: ev::MouseEvent| {
                    ev.stop_propagation();
                    lightbox.update(Lightbox::prev);
                }
            >
                <Icon icon=ic::CHEVRON_LEFT />
            </button>

            <img
                class="lightbox-image"
                src=move || image.get().map(|item| item.src)
                alt=move || image.get().map(|item| item.alt)
                style:display=move || if image.get().is_some() { "block" } else { "none" }
            />
            <video
                class="lightbox-video"
                node_ref=video_ref
                controls=true
                playsinline=true
                style:display=move || if video_cue.get().is_some() { "block" } else { "none" }
            ></video>

            <button
                class="lightbox-next"
                aria-label="Next"
                on:click=move |ev: ev::MouseEvent| {
                    ev.stop_propagation();
                    lightbox.update(Lightbox::next);
                }
            >
                <Icon icon=ic::CHEVRON_RIGHT />
            </button>
            <div class="lightbox-counter">
                {move || frame.get().map(|f| f.counter).unwrap_or_default()}
            </div>
        </div>
    }
}
