//! Static page sections: services, testimonials, 3D preview and footer.

use leptos::prelude::*;

use crate::app::SiteContext;
use crate::components::contact::SocialLinks;
use crate::config::SITE_NAME;

const SERVICES: &[(&str, &str)] = &[
    (
        "AERIAL PHOTOGRAPHY",
        "High-resolution stills for real estate, tourism and marketing.",
    ),
    (
        "AERIAL VIDEOGRAPHY",
        "Cinematic 4K footage for films, commercials and events.",
    ),
    (
        "INSPECTION & SURVEY",
        "Roof, tower and site inspections without scaffolding or lifts.",
    ),
    (
        "EVENT COVERAGE",
        "Live overhead coverage of weddings, festivals and sports.",
    ),
];

const TESTIMONIALS: &[(&str, &str)] = &[
    (
        "The footage made our listing stand out. Bookings doubled within a month.",
        "Property Manager",
    ),
    (
        "Professional, punctual and the shots were breathtaking.",
        "Event Organizer",
    ),
];

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container">
                <h2 class="section-title">"SERVICES"</h2>
                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .map(|(title, body)| {
                            view! {
                                <div class="service-card">
                                    <h3>{*title}</h3>
                                    <p>{*body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <h2 class="section-title">"TESTIMONIALS"</h2>
                {TESTIMONIALS
                    .iter()
                    .map(|(quote, author)| {
                        view! {
                            <blockquote class="testimonial">
                                <p>{*quote}</p>
                                <cite>{*author}</cite>
                            </blockquote>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Placeholder for the interactive flight-path preview.
#[component]
pub fn Preview3d() -> impl IntoView {
    view! {
        <section id="preview3d" class="preview-3d">
            <div class="container">
                <h2 class="section-title">"3D PREVIEW"</h2>
                <div class="preview-card">
                    <p>"Explore a 3D model of your site before the flight."</p>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<SiteContext>().config;
    let features = config.features.clone();
    let contact = config.contact.clone();

    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-brand">{SITE_NAME}</p>
                <p>
                    <a href=format!("mailto:{}", contact.email)>{contact.email.clone()}</a>
                </p>
                <SocialLinks social=contact.social />
                <nav class="footer-links">
                    {features
                        .client_portal
                        .then(|| view! { <a href="/portal/">"Client Portal"</a> })}
                    {features.admin_cms.then(|| view! { <a href="/admin/">"Admin"</a> })}
                </nav>
            </div>
        </footer>
    }
}
