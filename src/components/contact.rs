//! Contact section: details, social links and the enquiry form.
//!
//! Only mounted when the contact form feature is enabled.

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use crate::app::SiteContext;
use crate::config::contact::{ERROR_COLOR, MESSAGE_DURATION_MS, SUBMIT_DELAY_MS};
use crate::core::form::{ContactForm, FormMessage, is_missing};
use crate::models::Social;
use crate::utils::dom;

fn field_target(ev: &ev::Event) -> HtmlElement {
    event_target::<HtmlElement>(ev)
}

fn on_field_blur(ev: ev::FocusEvent) {
    let field = field_target(&ev);
    let required = field.has_attribute("required");
    let style = field.style();
    if is_missing(&event_target_value(&ev), required) {
        let _ = style.set_property("border-color", ERROR_COLOR);
    } else {
        let _ = style.remove_property("border-color");
    }
}

fn clear_field_error(ev: &ev::Event) {
    let _ = field_target(ev).style().remove_property("border-color");
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let ctx = expect_context::<SiteContext>();
    let contact = ctx.config.contact.clone();

    view! {
        <section id="contact" class="contact">
            <div class="container">
                <h2 class="section-title">"GET IN TOUCH"</h2>
                <div class="contact-grid">
                    <div class="contact-info">
                        <p>
                            <a href=format!("mailto:{}", contact.email)>{contact.email.clone()}</a>
                        </p>
                        <p>
                            <a href=format!("tel:{}", contact.phone)>{contact.phone.clone()}</a>
                        </p>
                        <SocialLinks social=contact.social />
                    </div>
                    <EnquiryForm />
                </div>
            </div>
        </section>
    }
}

/// Links for each configured social profile.
#[component]
pub fn SocialLinks(social: Social) -> impl IntoView {
    let profiles = [
        ("Twitter", social.twitter),
        ("Instagram", social.instagram),
        ("YouTube", social.youtube),
    ];

    view! {
        <div class="social-links">
            {profiles
                .into_iter()
                .filter_map(|(label, url)| url.map(|url| (label, url)))
                .map(|(label, url)| {
                    view! {
                        <a href=url target="_blank" rel="noopener noreferrer" aria-label=label>
                            {label}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn EnquiryForm() -> impl IntoView {
    let form_state = RwSignal::new(ContactForm::default());
    let form_ref = NodeRef::<html::Form>::new();
    let message = RwSignal::new(None::<(FormMessage, f64)>);
    // Bumped per flash so a stale timer does not dismiss a newer message
    let flash_id = StoredValue::new(0u32);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = false;
        form_state.update(|f| started = f.begin_submit());
        if !started {
            return;
        }

        spawn_local(async move {
            TimeoutFuture::new(SUBMIT_DELAY_MS).await;

            // There is no backend; the simulated send always succeeds
            let mut flash = FormMessage::success();
            form_state.update(|f| flash = f.finish(Ok::<(), ()>(())));
            if let Some(form) = form_ref.get_untracked() {
                form.reset();
            }

            let top = FormMessage::top_offset(dom::element_height(".header"));
            message.set(Some((flash, top)));

            flash_id.update_value(|id| *id = id.wrapping_add(1));
            let shown = flash_id.get_value();
            Timeout::new(MESSAGE_DURATION_MS, move || {
                if flash_id.get_value() == shown {
                    message.set(None);
                }
            })
            .forget();
        });
    };

    view! {
        <form id="contactForm" class="contact-form" node_ref=form_ref on:submit=on_submit>
            <input
                type="text"
                name="name"
                placeholder="Your Name"
                required=true
                on:blur=on_field_blur
                on:input=move |ev| clear_field_error(&ev)
            />
            <input
                type="email"
                name="email"
                placeholder="Your Email"
                required=true
                on:blur=on_field_blur
                on:input=move |ev| clear_field_error(&ev)
            />
            <select name="service" on:blur=on_field_blur on:input=move |ev| clear_field_error(&ev)>
                <option value="">"Select a Service"</option>
                <option value="photography">"Aerial Photography"</option>
                <option value="videography">"Aerial Videography"</option>
                <option value="inspection">"Inspection & Survey"</option>
                <option value="events">"Event Coverage"</option>
            </select>
            <textarea
                name="message"
                placeholder="Tell us about your project"
                rows="5"
                required=true
                on:blur=on_field_blur
                on:input=move |ev| clear_field_error(&ev)
            ></textarea>
            <button
                type="submit"
                class="submit-button"
                disabled=move || form_state.with(ContactForm::is_sending)
            >
                <span class="submit-text">
                    {move || form_state.with(ContactForm::button_label)}
                </span>
            </button>
        </form>
        {move || {
            message
                .get()
                .map(|(flash, top)| {
                    view! {
                        <div
                            class=flash.class_name()
                            role="status"
                            style:position="fixed"
                            style:top=format!("{}px", top)
                            style:left="50%"
                            style:transform="translateX(-50%)"
                        >
                            {flash.text}
                        </div>
                    }
                })
        }}
    }
}
