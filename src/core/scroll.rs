//! Scroll-driven effects: smooth anchor scrolling, header appearance,
//! reveal-on-scroll and hero parallax.
//!
//! Everything here is arithmetic on values read from the page; the
//! components do the reading and the style writes.

use crate::config::scroll::{
    HEADER_HIDE_AFTER, HEADER_SOLID_AFTER, PARALLAX_BASE_OFFSET, PARALLAX_MULTIPLIER,
    PARALLAX_SPEED, REVEAL_VIEWPORT_RATIO,
};

/// Element id targeted by an in-page link, if the link is one.
///
/// `"#"` alone and links to other pages are not smooth-scroll targets.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset to scroll to so the target clears the fixed header.
pub fn scroll_destination(rect_top: f64, page_offset: f64, header_offset: f64) -> f64 {
    rect_top + page_offset - header_offset
}

/// Header styling derived from the scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderAppearance {
    /// Opaque background once the page has scrolled
    pub solid: bool,
    /// Slid out of view while scrolling down
    pub hidden: bool,
}

/// Tracks the previous scroll position to detect direction.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeaderScroll {
    last_scroll: f64,
}

impl HeaderScroll {
    /// Record a new scroll position and compute the header appearance.
    pub fn update(&mut self, current: f64) -> HeaderAppearance {
        let appearance = HeaderAppearance {
            solid: current > HEADER_SOLID_AFTER,
            hidden: current > self.last_scroll && current > HEADER_HIDE_AFTER,
        };
        self.last_scroll = current;
        appearance
    }
}

/// Whether an element with the given bounding box should be revealed.
pub fn is_revealed(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height * REVEAL_VIEWPORT_RATIO && bottom > 0.0
}

/// CSS transform for the hero video at a scroll offset.
pub fn parallax_transform(scroll_y: f64) -> String {
    let offset = PARALLAX_BASE_OFFSET + scroll_y * PARALLAX_SPEED * PARALLAX_MULTIPLIER;
    format!("translate(-50%, -{}%)", offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#services"), Some("services"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("https://example.com/#top"), None);
    }

    #[test]
    fn test_scroll_destination_subtracts_header() {
        assert_eq!(scroll_destination(500.0, 0.0, 60.0), 440.0);
        assert_eq!(scroll_destination(-200.0, 1000.0, 60.0), 740.0);
    }

    #[test]
    fn test_header_solid_after_threshold() {
        let mut header = HeaderScroll::default();
        assert!(!header.update(50.0).solid);
        assert!(header.update(150.0).solid);
    }

    #[test]
    fn test_header_hides_when_scrolling_down_far() {
        let mut header = HeaderScroll::default();
        assert!(!header.update(400.0).hidden);
        assert!(header.update(600.0).hidden);
        assert!(!header.update(550.0).hidden);
        assert!(header.update(700.0).hidden);
    }

    #[test]
    fn test_reveal_window() {
        assert!(is_revealed(100.0, 300.0, 1000.0));
        assert!(!is_revealed(900.0, 1200.0, 1000.0));
        assert!(!is_revealed(-400.0, -10.0, 1000.0));
    }

    #[test]
    fn test_parallax_transform() {
        assert_eq!(parallax_transform(0.0), "translate(-50%, -50%)");
        assert_eq!(parallax_transform(1000.0), "translate(-50%, -65%)");
    }
}
