//! Utility modules for browser and network operations.
//!
//! Provides:
//! - [`console`] - `log` backend for the browser console
//! - [`dom`] - Scrolling, style and element helpers
//! - [`fetch_json`], [`HttpManifestSource`] - Network fetching with timeout
//! - [`perf`] - Development performance report

pub mod console;
pub mod dom;
mod fetch;
pub mod perf;

pub use fetch::{HttpManifestSource, RaceResult, fetch_json, race_with_timeout};
