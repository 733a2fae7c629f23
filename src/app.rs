//! Root application module.
//!
//! Contains the main App component and the [`SiteContext`] shared by every
//! section.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::{
    BookingSection, ContactSection, Footer, GallerySection, Header, Hero, LightboxOverlay,
    Preview3d, ScrollEffects, Services, Testimonials,
};
use crate::config;
use crate::core::Lightbox;
use crate::core::menu::MobileMenu;
use crate::core::scroll::HeaderAppearance;
use crate::models::SiteConfig;
use crate::utils::dom;

// ============================================================================
// SiteContext
// ============================================================================

/// Site-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `expect_context::<SiteContext>()`.
///
/// The gallery writes the lightbox item list after each render; the
/// lightbox component only reads it.
#[derive(Clone)]
pub struct SiteContext {
    /// Configuration parsed once at start-up.
    pub config: Arc<SiteConfig>,

    /// Mobile navigation menu state.
    pub menu: RwSignal<MobileMenu>,

    /// Lightbox items, cursor and visibility.
    pub lightbox: RwSignal<Lightbox>,

    /// Header styling driven by the scroll position.
    pub header: RwSignal<HeaderAppearance>,
}

impl SiteContext {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config: Arc::new(config),
            menu: RwSignal::new(MobileMenu::default()),
            lightbox: RwSignal::new(Lightbox::default()),
            header: RwSignal::new(HeaderAppearance::default()),
        }
    }
}

/// Inject the analytics script if the configuration asks for one.
fn load_analytics(config: &SiteConfig) {
    let Some(script) = config.analytics_script() else {
        return;
    };
    if dom::inject_script(script.src, &[("data-domain", &script.domain)]) {
        log::info!("Analytics loaded for {}", script.domain);
    } else {
        log::warn!("Failed to inject analytics script {}", script.src);
    }
}

/// Root application component.
///
/// Renders the sections enabled in the site configuration and owns the
/// body scroll lock shared by the mobile menu and the lightbox.
#[component]
pub fn App() -> impl IntoView {
    let ctx = SiteContext::new(config::site_config());
    let config = ctx.config.clone();
    let menu = ctx.menu;
    let lightbox = ctx.lightbox;
    provide_context(ctx);

    load_analytics(&config);
    if !config.features.client_portal {
        log::info!("Client portal is disabled");
    }

    Effect::new(move || {
        let locked = menu.with(MobileMenu::is_open) || lightbox.with(Lightbox::is_open);
        dom::set_scroll_locked(locked);
    });

    let features = config.features.clone();

    view! {
        <Header />
        <main>
            <Hero />
            <Services />
            <GallerySection />
            {features.preview_3d.then(|| view! { <Preview3d /> })}
            {features.testimonials.then(|| view! { <Testimonials /> })}
            {features.calendly.then(|| view! { <BookingSection /> })}
            {features.contact_form.then(|| view! { <ContactSection /> })}
        </main>
        <Footer />
        <LightboxOverlay />
        <ScrollEffects />
    }
}
