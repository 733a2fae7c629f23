//! Site configuration types.
//!
//! The configuration is an immutable value parsed once at start-up and
//! shared with components through context. Every section has defaults so a
//! partial document is valid.

use serde::Deserialize;

// =============================================================================
// Feature Flags
// =============================================================================

/// Flags controlling which page sections are rendered.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Features {
    /// Testimonials section (enable once real client reviews exist)
    pub testimonials: bool,
    /// Contact form section
    pub contact_form: bool,
    /// Calendly booking widget
    pub calendly: bool,
    /// Client file-delivery portal link
    pub client_portal: bool,
    /// Admin CMS link
    pub admin_cms: bool,
    /// 3D preview section
    pub preview_3d: bool,
    /// Analytics script injection
    pub analytics: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            testimonials: false,
            contact_form: false,
            calendly: true,
            client_portal: false,
            admin_cms: true,
            preview_3d: false,
            analytics: false,
        }
    }
}

// =============================================================================
// Contact / Calendly / Analytics
// =============================================================================

/// Social media links.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Social {
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub youtube: Option<String>,
}

/// Public contact details.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub social: Social,
}

/// Calendly inline widget settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Calendly {
    /// Scheduling page URL
    pub url: String,
    /// Hex colour without the leading '#'
    pub primary_color: String,
    pub hide_gdpr_banner: bool,
}

impl Default for Calendly {
    fn default() -> Self {
        Self {
            url: String::new(),
            primary_color: "00d4ff".to_string(),
            hide_gdpr_banner: true,
        }
    }
}

/// Supported analytics providers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsProvider {
    Plausible,
    Netlify,
    Goatcounter,
    #[default]
    None,
}

/// Analytics settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Analytics {
    pub provider: AnalyticsProvider,
    pub domain: String,
}

// =============================================================================
// Gallery
// =============================================================================

/// Gallery loading and animation settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GallerySettings {
    /// Manifest location relative to the page
    pub manifest_path: String,
    /// Append a `?v=<timestamp>` query to defeat HTTP caches
    pub cache_bust: bool,
    /// Fade-in duration per item, in seconds
    pub animation_duration_s: f64,
    /// Delay added per item index, in seconds
    pub stagger_delay_s: f64,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            manifest_path: "assets/gallery.json".to_string(),
            cache_bust: true,
            animation_duration_s: 0.5,
            stagger_delay_s: 0.1,
        }
    }
}

// =============================================================================
// Root
// =============================================================================

/// Complete site configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub features: Features,
    pub contact: Contact,
    pub calendly: Calendly,
    pub analytics: Analytics,
    pub gallery: GallerySettings,
}

/// Destination of the hero call-to-action button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroCta {
    pub href: &'static str,
    pub label: &'static str,
}

/// A navigation link in the page header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

impl NavLink {
    const fn new(href: &'static str, label: &'static str) -> Self {
        Self { href, label }
    }
}

/// Script tag to inject for analytics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyticsScript {
    pub src: &'static str,
    pub domain: String,
}

impl SiteConfig {
    /// Pick the hero call-to-action based on which sections are enabled.
    ///
    /// Booking wins over contact; with both disabled the button points at
    /// the gallery instead.
    pub fn hero_cta(&self) -> HeroCta {
        if self.features.calendly {
            HeroCta {
                href: "#booking",
                label: "BOOK A FLIGHT",
            }
        } else if self.features.contact_form {
            HeroCta {
                href: "#contact",
                label: "GET IN TOUCH",
            }
        } else {
            HeroCta {
                href: "#gallery",
                label: "VIEW OUR WORK",
            }
        }
    }

    /// Calendly widget URL with the display options appended.
    pub fn calendly_widget_url(&self) -> String {
        format!(
            "{}?hide_gdpr_banner={}&primary_color={}",
            self.calendly.url,
            if self.calendly.hide_gdpr_banner { "1" } else { "0" },
            self.calendly.primary_color
        )
    }

    /// Analytics script to load, if analytics is enabled for a provider
    /// that needs one.
    pub fn analytics_script(&self) -> Option<AnalyticsScript> {
        if !self.features.analytics {
            return None;
        }
        match self.analytics.provider {
            AnalyticsProvider::Plausible => Some(AnalyticsScript {
                src: "https://plausible.io/js/script.js",
                domain: self.analytics.domain.clone(),
            }),
            _ => None,
        }
    }

    /// Header navigation, omitting links to disabled sections.
    pub fn nav_links(&self) -> Vec<NavLink> {
        let f = &self.features;
        [
            (true, NavLink::new("#home", "HOME")),
            (true, NavLink::new("#services", "SERVICES")),
            (true, NavLink::new("#gallery", "GALLERY")),
            (f.testimonials, NavLink::new("#testimonials", "TESTIMONIALS")),
            (f.calendly, NavLink::new("#booking", "BOOKING")),
            (f.contact_form, NavLink::new("#contact", "CONTACT")),
        ]
        .into_iter()
        .filter_map(|(enabled, link)| enabled.then_some(link))
        .collect()
    }
}
