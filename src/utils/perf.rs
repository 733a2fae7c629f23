//! Development performance report.
//!
//! Only active on `localhost`/`127.0.0.1`. Shortly after start-up it logs
//! navigation timings, resource transfer sizes and image loading metrics.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlImageElement, PerformanceResourceTiming};

use super::dom;
use crate::config::PERF_REPORT_DELAY_MS;
use crate::core::perf::{ImageMetrics, NavigationTimings, ResourceSizes, is_dev_host};

fn log_lines(lines: Vec<String>) {
    for line in lines {
        log::info!("{}", line);
    }
}

/// Start the report if running on a development host.
pub fn init_performance_monitoring() {
    if !is_dev_host(&dom::hostname()) {
        return;
    }
    log::info!("Performance monitoring enabled (development mode)");

    wasm_bindgen_futures::spawn_local(async {
        TimeoutFuture::new(PERF_REPORT_DELAY_MS).await;
        log_navigation_timings();
        log_resource_sizes();
        track_image_loading();
    });
}

fn log_navigation_timings() {
    let Some(performance) = dom::window().and_then(|w| w.performance()) else {
        return;
    };
    let timing = performance.timing();
    let timings = NavigationTimings::from_marks(
        timing.navigation_start(),
        timing.response_start(),
        timing.dom_content_loaded_event_end(),
        timing.load_event_end(),
    );
    log_lines(timings.report());
}

fn log_resource_sizes() {
    let Some(performance) = dom::window().and_then(|w| w.performance()) else {
        return;
    };

    let mut sizes = ResourceSizes::default();
    for entry in performance.get_entries_by_type("resource").iter() {
        let Ok(resource) = entry.dyn_into::<PerformanceResourceTiming>() else {
            continue;
        };
        let transfer = resource.transfer_size();
        let bytes = if transfer > 0.0 {
            transfer
        } else {
            resource.encoded_body_size()
        };
        sizes.record(&resource.name(), bytes);
    }
    log_lines(sizes.report());
}

/// Count image outcomes; pending images report when the last one settles.
fn track_image_loading() {
    let images: Vec<HtmlImageElement> = dom::query_all("img")
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlImageElement>().ok())
        .collect();

    let metrics = Rc::new(RefCell::new(ImageMetrics::new(images.len())));
    let mut pending = Vec::new();

    for img in images {
        if img.complete() {
            metrics.borrow_mut().record_loaded(&img.current_src());
        } else {
            pending.push(img);
        }
    }

    if pending.is_empty() {
        log_lines(metrics.borrow().report());
        return;
    }

    for img in pending {
        let on_load = {
            let metrics = metrics.clone();
            let img = img.clone();
            Closure::<dyn FnMut()>::new(move || {
                let mut m = metrics.borrow_mut();
                m.record_loaded(&img.current_src());
                if m.is_settled() {
                    log_lines(m.report());
                }
            })
        };
        let on_error = {
            let metrics = metrics.clone();
            let src = img.src();
            Closure::<dyn FnMut()>::new(move || {
                log::warn!("Failed to load image: {}", src);
                let mut m = metrics.borrow_mut();
                m.record_failed();
                if m.is_settled() {
                    log_lines(m.report());
                }
            })
        };

        let _ = img.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
        let _ = img.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
        // Listeners live for the page lifetime
        on_load.forget();
        on_error.forget();
    }
}
