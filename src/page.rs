//! Page environment snapshot.
//!
//! This module defines the host-supplied facts about the page the beacon is
//! running on: the URL, title, referrer, user agent, and screen dimensions,
//! plus the per-scroll viewport measurements. The beacon never reads a DOM
//! itself; the hosting page layer captures these values and hands them over.

use std::collections::BTreeMap;

use url::Url;

/// Facts about the page captured once at session start.
///
/// Immutable for the page lifetime. The site is a single scrolling page, so
/// the URL and title never change underneath a running session.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    /// Full page URL including the query string.
    pub url: Url,
    /// Document title.
    pub title: String,
    /// Referrer, if the browser exposed one.
    pub referrer: Option<String>,
    /// Browser user-agent string.
    pub user_agent: String,
    /// Screen width in CSS pixels.
    pub screen_width: u32,
    /// Screen height in CSS pixels.
    pub screen_height: u32,
}

impl PageSnapshot {
    /// Path component of the page URL.
    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Query parameters parsed into an ordered map.
    ///
    /// Captured verbatim into page-view events. A repeated key keeps its last
    /// value.
    pub fn query_params(&self) -> BTreeMap<String, String> {
        self.url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }
}

/// Scroll-position measurements supplied with each scroll notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    /// Vertical scroll offset in CSS pixels.
    pub scroll_y: f64,
    /// Viewport (window) height in CSS pixels.
    pub viewport_height: f64,
    /// Full document height in CSS pixels.
    pub document_height: f64,
}

/// Computes the scroll depth as a rounded percentage of the scrollable range.
///
/// When the document is no taller than the viewport the scrollable range is
/// zero or negative and the division is undefined; that case reports 0%
/// rather than NaN or a spurious 100%. Results are clamped to 0-100.
pub fn scroll_percentage(metrics: &ViewportMetrics) -> u8 {
    let scrollable = metrics.document_height - metrics.viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 0;
    }
    let pct = (metrics.scroll_y / scrollable * 100.0).round();
    if !pct.is_finite() {
        return 0;
    }
    pct.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(url: &str) -> PageSnapshot {
        PageSnapshot {
            url: Url::parse(url).unwrap(),
            title: "Comets AI".to_string(),
            referrer: None,
            user_agent: "test".to_string(),
            screen_width: 1920,
            screen_height: 1080,
        }
    }

    #[test]
    fn test_query_params_parsed() {
        let snap = snapshot("https://cometsai.app/?installed=true&utm_source=store");
        let params = snap.query_params();
        assert_eq!(params.get("installed").map(String::as_str), Some("true"));
        assert_eq!(params.get("utm_source").map(String::as_str), Some("store"));
    }

    #[test]
    fn test_query_params_empty() {
        let snap = snapshot("https://cometsai.app/");
        assert!(snap.query_params().is_empty());
    }

    #[test]
    fn test_scroll_percentage_midpoint() {
        let metrics = ViewportMetrics {
            scroll_y: 500.0,
            viewport_height: 1000.0,
            document_height: 2000.0,
        };
        assert_eq!(scroll_percentage(&metrics), 50);
    }

    #[test]
    fn test_scroll_percentage_rounds() {
        let metrics = ViewportMetrics {
            scroll_y: 333.0,
            viewport_height: 1000.0,
            document_height: 2000.0,
        };
        // 333 / 1000 = 33.3% -> rounds to 33
        assert_eq!(scroll_percentage(&metrics), 33);
    }

    #[test]
    fn test_scroll_percentage_short_document_is_zero() {
        // Document no taller than the viewport: the division is undefined and
        // must not report a spurious 100%.
        let metrics = ViewportMetrics {
            scroll_y: 0.0,
            viewport_height: 1000.0,
            document_height: 1000.0,
        };
        assert_eq!(scroll_percentage(&metrics), 0);

        let metrics = ViewportMetrics {
            scroll_y: 10.0,
            viewport_height: 1000.0,
            document_height: 800.0,
        };
        assert_eq!(scroll_percentage(&metrics), 0);
    }

    #[test]
    fn test_scroll_percentage_clamped() {
        // Overscroll (rubber-banding) can push scroll_y past the range.
        let metrics = ViewportMetrics {
            scroll_y: 1200.0,
            viewport_height: 1000.0,
            document_height: 2000.0,
        };
        assert_eq!(scroll_percentage(&metrics), 100);

        let metrics = ViewportMetrics {
            scroll_y: -50.0,
            viewport_height: 1000.0,
            document_height: 2000.0,
        };
        assert_eq!(scroll_percentage(&metrics), 0);
    }

    #[test]
    fn test_scroll_percentage_non_finite_input() {
        let metrics = ViewportMetrics {
            scroll_y: f64::NAN,
            viewport_height: 1000.0,
            document_height: 2000.0,
        };
        assert_eq!(scroll_percentage(&metrics), 0);

        let metrics = ViewportMetrics {
            scroll_y: 100.0,
            viewport_height: f64::INFINITY,
            document_height: 2000.0,
        };
        assert_eq!(scroll_percentage(&metrics), 0);
    }
}
