//! Aggregation for the development performance report.
//!
//! The browser side (`utils::perf`) reads timings and resource entries and
//! feeds them in here; this module only classifies, sums and formats.

/// Hostnames treated as local development.
const DEV_HOSTS: &[&str] = &["localhost", "127.0.0.1"];

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg", "ico"];

/// Whether the page is served from a development host.
pub fn is_dev_host(hostname: &str) -> bool {
    DEV_HOSTS.contains(&hostname)
}

fn kb(bytes: f64) -> String {
    format!("{:.1} KB", bytes / 1024.0)
}

// =============================================================================
// Navigation Timings
// =============================================================================

/// Page load milestones, in milliseconds since navigation start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationTimings {
    pub first_byte: f64,
    pub dom_ready: f64,
    pub load_complete: f64,
}

impl NavigationTimings {
    /// Build from absolute timestamps.
    pub fn from_marks(
        navigation_start: f64,
        response_start: f64,
        dom_content_loaded_end: f64,
        load_event_end: f64,
    ) -> Self {
        Self {
            first_byte: response_start - navigation_start,
            dom_ready: dom_content_loaded_end - navigation_start,
            load_complete: load_event_end - navigation_start,
        }
    }

    pub fn report(&self) -> Vec<String> {
        vec![
            "Performance Metrics:".to_string(),
            format!("  Time to First Byte: {}ms", self.first_byte),
            format!("  DOM Ready: {}ms", self.dom_ready),
            format!("  Page Load Complete: {}ms", self.load_complete),
        ]
    }
}

// =============================================================================
// Resource Sizes
// =============================================================================

/// Resource bucket for the size report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceClass {
    Image,
    Script,
    Style,
    Other,
}

impl ResourceClass {
    /// Classify a resource URL by its extension.
    pub fn from_name(name: &str) -> Self {
        let path = name.split(['?', '#']).next().unwrap_or(name);
        let ext = path
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "js" => Self::Script,
            "css" => Self::Style,
            e if IMAGE_EXTENSIONS.contains(&e) => Self::Image,
            _ => Self::Other,
        }
    }
}

/// Transfer sizes grouped by resource class, in bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResourceSizes {
    pub images: f64,
    pub scripts: f64,
    pub styles: f64,
    pub other: f64,
    pub total: f64,
}

impl ResourceSizes {
    pub fn record(&mut self, name: &str, bytes: f64) {
        self.total += bytes;
        match ResourceClass::from_name(name) {
            ResourceClass::Image => self.images += bytes,
            ResourceClass::Script => self.scripts += bytes,
            ResourceClass::Style => self.styles += bytes,
            ResourceClass::Other => self.other += bytes,
        }
    }

    pub fn report(&self) -> Vec<String> {
        vec![
            "Resource Sizes:".to_string(),
            format!("  Images: {}", kb(self.images)),
            format!("  Scripts: {}", kb(self.scripts)),
            format!("  Styles: {}", kb(self.styles)),
            format!("  Other: {}", kb(self.other)),
            format!("  Total: {}", kb(self.total)),
        ]
    }
}

// =============================================================================
// Image Loading
// =============================================================================

/// Image load outcomes, split by whether the WebP variant was chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageMetrics {
    pub total: usize,
    pub loaded: usize,
    pub failed: usize,
    pub webp: usize,
    pub fallback: usize,
}

impl ImageMetrics {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Record a loaded image by the source the browser picked.
    pub fn record_loaded(&mut self, current_src: &str) {
        self.loaded += 1;
        if current_src.contains(".webp") {
            self.webp += 1;
        } else {
            self.fallback += 1;
        }
    }

    pub fn record_failed(&mut self) {
        self.failed += 1;
    }

    /// Every image has either loaded or failed.
    pub fn is_settled(&self) -> bool {
        self.loaded + self.failed >= self.total
    }

    /// Percentage of loaded images served as WebP.
    pub fn webp_share(&self) -> Option<f64> {
        (self.webp > 0).then(|| self.webp as f64 / self.loaded as f64 * 100.0)
    }

    pub fn report(&self) -> Vec<String> {
        let mut lines = vec![
            "Image Loading Metrics:".to_string(),
            format!("  Total: {}", self.total),
            format!("  Loaded: {}", self.loaded),
            format!("  Failed: {}", self.failed),
            format!("  WebP: {}", self.webp),
            format!("  Fallback: {}", self.fallback),
        ];
        if let Some(share) = self.webp_share() {
            lines.push(format!("  WebP Usage: {:.1}%", share));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_hosts() {
        assert!(is_dev_host("localhost"));
        assert!(is_dev_host("127.0.0.1"));
        assert!(!is_dev_host("skyviewdynamics.com"));
    }

    #[test]
    fn test_resource_classification() {
        assert_eq!(ResourceClass::from_name("https://x.io/a/photo.WEBP"), ResourceClass::Image);
        assert_eq!(ResourceClass::from_name("/pkg/app.js?v=3"), ResourceClass::Script);
        assert_eq!(ResourceClass::from_name("/style.css"), ResourceClass::Style);
        assert_eq!(ResourceClass::from_name("/pkg/app_bg.wasm"), ResourceClass::Other);
        assert_eq!(ResourceClass::from_name("/assets/gallery.json"), ResourceClass::Other);
    }

    #[test]
    fn test_resource_sizes_report() {
        let mut sizes = ResourceSizes::default();
        sizes.record("a.jpg", 2048.0);
        sizes.record("b.js", 1024.0);
        sizes.record("c.css", 512.0);

        assert_eq!(sizes.total, 3584.0);
        let report = sizes.report();
        assert_eq!(report[1], "  Images: 2.0 KB");
        assert_eq!(report[3], "  Styles: 0.5 KB");
        assert_eq!(report[5], "  Total: 3.5 KB");
    }

    #[test]
    fn test_navigation_timings() {
        let timings = NavigationTimings::from_marks(1000.0, 1120.0, 1400.0, 2100.0);
        assert_eq!(timings.first_byte, 120.0);
        assert_eq!(timings.dom_ready, 400.0);
        assert_eq!(timings.load_complete, 1100.0);
    }

    #[test]
    fn test_image_metrics() {
        let mut metrics = ImageMetrics::new(4);
        metrics.record_loaded("http://localhost/a.webp");
        metrics.record_loaded("http://localhost/b.jpg");
        metrics.record_loaded("http://localhost/c.webp");
        assert!(!metrics.is_settled());
        metrics.record_failed();
        assert!(metrics.is_settled());

        assert_eq!(metrics.webp, 2);
        assert_eq!(metrics.fallback, 1);
        let share = metrics.webp_share().unwrap();
        assert!((share - 66.666).abs() < 0.01);
        assert_eq!(metrics.report().last().unwrap(), "  WebP Usage: 66.7%");
    }

    #[test]
    fn test_no_webp_share_without_webp() {
        let mut metrics = ImageMetrics::new(1);
        metrics.record_loaded("a.jpg");
        assert_eq!(metrics.webp_share(), None);
        assert_eq!(metrics.report().len(), 6);
    }
}
