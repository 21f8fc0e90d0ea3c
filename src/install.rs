//! Extension installation detection.
//!
//! The landing page shows different copy depending on whether the Comets AI
//! extension is already installed. Two signals exist: the store redirects back
//! with `?installed=true` in the URL, and the extension's content script
//! writes a boolean marker attribute on the document root. The URL is read
//! directly; the marker is read through the [`MarkerSource`] seam so the crate
//! stays independent of any particular DOM binding.

use url::Url;

/// Query parameter signalling extension presence.
const INSTALLED_PARAM: &str = "installed";

/// Inspects the page URL for the `installed=true` query parameter.
///
/// Absence of the parameter (or any value other than `"true"`) is the default
/// not-installed state, never an error. No side effects beyond the read.
pub fn detect_installation(url: &Url) -> bool {
    url.query_pairs()
        .any(|(k, v)| k == INSTALLED_PARAM && v == "true")
}

/// Read-only view of the marker attribute the extension's content script
/// writes on the document root.
pub trait MarkerSource: Send + Sync {
    /// Current marker value, or `None` while the attribute is absent.
    fn extension_marker(&self) -> Option<bool>;
}

/// Marker source for hosts without a DOM (tests, prerendering).
pub struct NoMarker;

impl MarkerSource for NoMarker {
    fn extension_marker(&self) -> Option<bool> {
        None
    }
}

/// Resolves the installation flag from both signals at a single point in time:
/// the URL parameter, corroborated by an immediate marker poll.
///
/// The content script may inject the marker after page boot; callers that care
/// about that window poll the marker again later (see the session bootstrap),
/// but the flag exposed to the page is computed exactly once and never
/// transitions.
pub fn resolve_installation(url: &Url, marker: &dyn MarkerSource) -> bool {
    detect_installation(url) || marker.extension_marker().unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_detects_installed_true() {
        assert!(detect_installation(&url("https://cometsai.app/?installed=true")));
    }

    #[test]
    fn test_no_query_string_is_not_installed() {
        assert!(!detect_installation(&url("https://cometsai.app/")));
    }

    #[test]
    fn test_installed_false_is_not_installed() {
        assert!(!detect_installation(&url(
            "https://cometsai.app/?installed=false"
        )));
    }

    #[test]
    fn test_other_params_ignored() {
        assert!(!detect_installation(&url(
            "https://cometsai.app/?utm_source=store&ref=installed"
        )));
    }

    #[test]
    fn test_installed_among_other_params() {
        assert!(detect_installation(&url(
            "https://cometsai.app/?utm_source=store&installed=true"
        )));
    }

    struct FixedMarker(Option<bool>);

    impl MarkerSource for FixedMarker {
        fn extension_marker(&self) -> Option<bool> {
            self.0
        }
    }

    #[test]
    fn test_marker_corroborates() {
        let plain = url("https://cometsai.app/");
        assert!(resolve_installation(&plain, &FixedMarker(Some(true))));
        assert!(!resolve_installation(&plain, &FixedMarker(Some(false))));
        assert!(!resolve_installation(&plain, &FixedMarker(None)));
    }

    #[test]
    fn test_query_wins_regardless_of_marker() {
        let installed = url("https://cometsai.app/?installed=true");
        assert!(resolve_installation(&installed, &NoMarker));
        assert!(resolve_installation(&installed, &FixedMarker(Some(false))));
    }
}
