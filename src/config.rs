//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the site. The
//! feature flags and integration settings are loaded from `assets/site.toml`
//! at compile time using `include_str!`.

use crate::core::RenderOptions;
use crate::core::error::ConfigError;
use crate::models::SiteConfig;

// =============================================================================
// Site Metadata
// =============================================================================

/// Business name shown in the header and footer.
pub const SITE_NAME: &str = "SkyView Dynamics";

/// Tagline shown in the hero section.
pub const SITE_TAGLINE: &str = "Aerial Photography & Videography";

/// Hero background video.
pub const HERO_VIDEO_SRC: &str = "assets/hero.mp4";

/// Hero video poster frame.
pub const HERO_POSTER_SRC: &str = "assets/hero.jpg";

// =============================================================================
// Site Configuration
// =============================================================================

/// Raw site configuration document.
const SITE_TOML: &str = include_str!("../assets/site.toml");

/// Parse a site configuration document.
pub fn parse_site_config(source: &str) -> Result<SiteConfig, ConfigError> {
    Ok(toml::from_str(source)?)
}

/// Load the embedded site configuration.
///
/// A malformed document falls back to the defaults with a warning.
pub fn site_config() -> SiteConfig {
    parse_site_config(SITE_TOML).unwrap_or_else(|e| {
        log::warn!("{}; using defaults", e);
        SiteConfig::default()
    })
}

/// Render options derived from the gallery settings.
pub fn render_options(config: &SiteConfig) -> RenderOptions {
    RenderOptions {
        animation_duration_s: config.gallery.animation_duration_s,
        stagger_delay_s: config.gallery.stagger_delay_s,
    }
}

// =============================================================================
// Logging
// =============================================================================

/// Console log level.
pub const LOG_LEVEL: log::LevelFilter = if cfg!(debug_assertions) {
    log::LevelFilter::Debug
} else {
    log::LevelFilter::Info
};

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Layout Configuration
// =============================================================================

/// Viewport width below which the mobile menu is used.
pub const MOBILE_BREAKPOINT_QUERY: &str = "(max-width: 768px)";

/// Space left above smooth-scroll targets for the fixed header, in pixels.
pub const HEADER_OFFSET_PX: f64 = 60.0;

/// Scroll effect constants.
pub mod scroll {
    /// Header background turns solid past this offset.
    pub const HEADER_SOLID_AFTER: f64 = 100.0;
    /// Header hides when scrolling down past this offset.
    pub const HEADER_HIDE_AFTER: f64 = 500.0;
    /// Fraction of the viewport an element's top must pass to be revealed.
    pub const REVEAL_VIEWPORT_RATIO: f64 = 0.85;
    /// Elements that fade in as they scroll into view.
    pub const REVEAL_SELECTOR: &str = ".service-card, .preview-card, .contact-info, .contact-form";
    /// Throttle window for the header/reveal handler.
    pub const SCROLL_THROTTLE_MS: f64 = 100.0;

    /// Hero video vertical centering offset, in percent.
    pub const PARALLAX_BASE_OFFSET: f64 = 50.0;
    pub const PARALLAX_SPEED: f64 = 0.3;
    pub const PARALLAX_MULTIPLIER: f64 = 0.05;
    /// Throttle window for the parallax handler (~60fps).
    pub const PARALLAX_THROTTLE_MS: f64 = 16.0;
}

// =============================================================================
// Contact Form Configuration
// =============================================================================

/// Contact form timing constants (milliseconds).
pub mod contact {
    /// Simulated submission latency.
    pub const SUBMIT_DELAY_MS: u32 = 1500;
    /// How long the flash message stays up.
    pub const MESSAGE_DURATION_MS: u32 = 5000;
    /// Border colour for required fields left blank.
    pub const ERROR_COLOR: &str = "#ff4444";
}

// =============================================================================
// Development Tooling
// =============================================================================

/// Delay before the development performance report, in milliseconds.
pub const PERF_REPORT_DELAY_MS: u32 = 100;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the site.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
