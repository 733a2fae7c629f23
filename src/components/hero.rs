//! Hero section with the background video and call to action.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use crate::app::SiteContext;
use crate::config::scroll::PARALLAX_THROTTLE_MS;
use crate::config::{HERO_POSTER_SRC, HERO_VIDEO_SRC, SITE_NAME, SITE_TAGLINE};
use crate::core::scroll::parallax_transform;
use crate::core::throttle;
use crate::utils::dom::{self, BrowserClock};

#[component]
pub fn Hero() -> impl IntoView {
    let cta = expect_context::<SiteContext>().config.hero_cta();
    let video_ref = NodeRef::<html::Video>::new();

    let parallax = throttle(BrowserClock, PARALLAX_THROTTLE_MS, move |_: ()| {
        if let Some(video) = video_ref.get_untracked() {
            let transform = parallax_transform(dom::scroll_y());
            dom::set_styles(&video, &[("transform", transform.as_str())]);
        }
    });
    let scroll = window_event_listener(ev::scroll, move |_| parallax.call(()));
    on_cleanup(move || scroll.remove());

    view! {
        <section id="home" class="hero">
            <video
                class="hero-video"
                node_ref=video_ref
                src=HERO_VIDEO_SRC
                poster=HERO_POSTER_SRC
                autoplay=true
                muted=true
                loop=true
                playsinline=true
            ></video>
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <h1 class="hero-title">{SITE_NAME}</h1>
                <p class="hero-subtitle">{SITE_TAGLINE}</p>
                <a href=cta.href class="cta-button">
                    <span class="cta-text">{cta.label}</span>
                </a>
            </div>
        </section>
    }
}
