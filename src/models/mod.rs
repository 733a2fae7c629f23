//! Data models and types for the site.
//!
//! Contains domain types for:
//! - [`Manifest`], [`ManifestEntry`], [`MediaType`] - Gallery manifest (`gallery.json`)
//! - [`SiteConfig`] and its sections - Feature flags and integrations (`site.toml`)

mod manifest;
mod site;

pub use manifest::{DEFAULT_CATEGORY, Manifest, ManifestEntry, MediaType};
pub use site::{
    Analytics, AnalyticsProvider, AnalyticsScript, Calendly, Contact, Features,
    GallerySettings, HeroCta, NavLink, SiteConfig, Social,
};
