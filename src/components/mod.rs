//! UI components built with Leptos.
//!
//! - [`header`] - Fixed header, navigation and mobile menu
//! - [`hero`] - Hero video with parallax and call to action
//! - [`gallery`] - Manifest-driven media grid
//! - [`lightbox`] - Full-screen viewer over the gallery items
//! - [`booking`], [`contact`], [`sections`] - Remaining page sections
//! - [`effects`] - Page-wide scroll effects
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod booking;
pub mod contact;
pub mod effects;
pub mod gallery;
pub mod header;
pub mod hero;
pub mod icons;
pub mod lightbox;
pub mod sections;

pub use booking::BookingSection;
pub use contact::ContactSection;
pub use effects::ScrollEffects;
pub use gallery::GallerySection;
pub use header::Header;
pub use hero::Hero;
pub use lightbox::LightboxOverlay;
pub use sections::{Footer, Preview3d, Services, Testimonials};
