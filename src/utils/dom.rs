//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Missing elements or
//! failing calls are reported as `None`/`false`, never as panics.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::core::Clock;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get the page body.
#[inline]
pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

/// Milliseconds since the epoch.
#[inline]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// [`Clock`] backed by `Date.now()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> f64 {
        now_ms()
    }
}

// =============================================================================
// Scrolling
// =============================================================================

/// Current vertical scroll offset.
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Viewport height in CSS pixels.
pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Lock or release page scrolling behind an overlay.
pub fn set_scroll_locked(locked: bool) {
    if let Some(body) = body() {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}

/// Smoothly scroll the element with `id` to just below the fixed header.
///
/// Returns `false` if there is no such element.
pub fn scroll_to_anchor(id: &str, header_offset: f64) -> bool {
    let Some(window) = window() else {
        return false;
    };
    let Some(target) = document().and_then(|d| d.get_element_by_id(id)) else {
        return false;
    };

    let top = crate::core::scroll::scroll_destination(
        target.get_bounding_client_rect().top(),
        scroll_y(),
        header_offset,
    );

    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
    true
}

// =============================================================================
// Elements
// =============================================================================

/// All elements matching a selector that are `HtmlElement`s.
pub fn query_all(selector: &str) -> Vec<HtmlElement> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Set several inline style properties, ignoring failures.
pub fn set_styles(element: &HtmlElement, styles: &[(&str, &str)]) {
    let style = element.style();
    for (name, value) in styles {
        let _ = style.set_property(name, value);
    }
}

/// Rendered height of the first element matching `selector`.
pub fn element_height(selector: &str) -> f64 {
    document()
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .map(|el| el.get_bounding_client_rect().height())
        .unwrap_or(0.0)
}

/// Current page hostname.
pub fn hostname() -> String {
    window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default()
}

/// Append a deferred `<script>` to the document head.
pub fn inject_script(src: &str, attributes: &[(&str, &str)]) -> bool {
    let Some(document) = document() else {
        return false;
    };
    let Some(head) = document.head() else {
        return false;
    };
    let Ok(script) = document
        .create_element("script")
        .map(|el| el.unchecked_into::<web_sys::HtmlScriptElement>())
    else {
        return false;
    };

    script.set_src(src);
    script.set_defer(true);
    for (name, value) in attributes {
        let _ = script.set_attribute(name, value);
    }
    head.append_child(&script).is_ok()
}
