//! Calendly booking section.

use leptos::prelude::*;

use crate::app::SiteContext;
use crate::utils::dom;

const CALENDLY_WIDGET_SCRIPT: &str = "https://assets.calendly.com/assets/external/widget.js";

#[component]
pub fn BookingSection() -> impl IntoView {
    let url = expect_context::<SiteContext>().config.calendly_widget_url();

    // The widget script scans for `.calendly-inline-widget` when it loads
    Effect::new(move || {
        if !dom::inject_script(CALENDLY_WIDGET_SCRIPT, &[]) {
            log::warn!("Could not load the Calendly widget script");
        }
    });

    view! {
        <section id="booking" class="booking">
            <div class="container">
                <h2 class="section-title">"BOOK A FLIGHT"</h2>
                <div
                    class="calendly-inline-widget"
                    data-url=url
                    style="min-width: 320px; height: 700px;"
                ></div>
            </div>
        </section>
    }
}
