//! SkyView Dynamics marketing site.
//!
//! A client-side Leptos application. Browser-independent logic lives in
//! [`core`] and is tested natively; [`components`] and [`utils`] bind it to
//! the DOM.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Mount the application into `#app` and start the development report.
pub fn start() {
    console_error_panic_hook::set_once();
    utils::console::init(config::LOG_LEVEL);

    let Some(root) = utils::dom::document().and_then(|d| d.get_element_by_id("app")) else {
        log::error!("No #app element to mount into");
        return;
    };

    mount_to(root.unchecked_into::<web_sys::HtmlElement>(), app::App).forget();
    utils::perf::init_performance_monitoring();
}
