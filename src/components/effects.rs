//! Page-wide scroll effects: header appearance, reveal-on-scroll and
//! smooth in-page anchor scrolling.
//!
//! Renders nothing. Mount it after the sections so the reveal targets exist
//! when the initial styles are applied.

use std::cell::Cell;

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::app::SiteContext;
use crate::config::HEADER_OFFSET_PX;
use crate::config::scroll::{REVEAL_SELECTOR, SCROLL_THROTTLE_MS};
use crate::core::scroll::{HeaderScroll, anchor_target, is_revealed};
use crate::core::throttle;
use crate::utils::dom::{self, BrowserClock};

/// Fade in every reveal target currently inside the viewport.
fn reveal_visible() {
    let viewport = dom::viewport_height();
    for el in dom::query_all(REVEAL_SELECTOR) {
        let rect = el.get_bounding_client_rect();
        if is_revealed(rect.top(), rect.bottom(), viewport) {
            dom::set_styles(&el, &[("opacity", "1"), ("transform", "translateY(0)")]);
        }
    }
}

#[component]
pub fn ScrollEffects() -> impl IntoView {
    let header = expect_context::<SiteContext>().header;

    Effect::new(move || {
        for el in dom::query_all(REVEAL_SELECTOR) {
            dom::set_styles(
                &el,
                &[
                    ("opacity", "0"),
                    ("transform", "translateY(30px)"),
                    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
                ],
            );
        }
        reveal_visible();
    });

    let last = Cell::new(HeaderScroll::default());
    let on_scroll = throttle(BrowserClock, SCROLL_THROTTLE_MS, move |_: ()| {
        let mut state = last.get();
        let appearance = state.update(dom::scroll_y());
        last.set(state);
        if header.get_untracked() != appearance {
            header.set(appearance);
        }
        reveal_visible();
    });
    let scroll = window_event_listener(ev::scroll, move |_| on_scroll.call(()));

    let anchors = window_event_listener(ev::click, |ev| {
        let Some(link) = ev
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("a[href^='#']").ok().flatten())
        else {
            return;
        };
        let href = link.get_attribute("href").unwrap_or_default();
        let Some(id) = anchor_target(&href) else {
            return;
        };
        if dom::scroll_to_anchor(id, HEADER_OFFSET_PX) {
            ev.prevent_default();
        }
    });

    on_cleanup(move || {
        scroll.remove();
        anchors.remove();
    });
}
