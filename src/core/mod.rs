//! Core logic for the site, free of browser APIs.
//!
//! This module provides:
//! - [`media`] classification and [`render`]ing of gallery entries
//! - [`GalleryLoader`] manifest loading state machine
//! - [`Lightbox`] navigation state
//! - [`throttle`] rate limiting for scroll handlers
//! - State for the [`menu`], contact [`form`] and [`scroll`] effects
//! - [`perf`] aggregation for the development performance report

pub mod error;
pub mod form;
pub mod lightbox;
pub mod loader;
pub mod media;
pub mod menu;
pub mod perf;
pub mod render;
pub mod scroll;
pub mod throttle;

#[cfg(test)]
pub(crate) mod testing;

pub use lightbox::{Lightbox, LightboxFrame, LightboxItem, LightboxKey};
pub use loader::{Gallery, GalleryLoader, LoadState, ManifestSource};
pub use media::{ClassifiedItem, MediaKind, classify};
pub use render::{GALLERY_ERROR_MESSAGE, GalleryNode, MediaNode, RenderOptions, VideoNode};
pub use throttle::{Clock, throttle};
