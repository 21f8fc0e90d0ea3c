//! Named tracking helpers.
//!
//! Each helper composes a fixed category/action pair and a small set of
//! descriptive extra properties, then delegates to [`Beacon::event`]. They
//! exist to keep call-sites declarative; none contains logic beyond constant
//! shaping.

use serde_json::json;

use super::Beacon;
use crate::sink::Properties;

fn props<const N: usize>(entries: [(&str, serde_json::Value); N]) -> Properties {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

impl Beacon {
    /// Click on a "get it on the Chrome Web Store" button.
    pub fn track_chrome_store_click(&self, location: &str, extension_installed: bool) {
        self.event(
            "CTA",
            "Chrome Web Store Click",
            Some(location),
            None,
            props([
                ("cta_location", json!(location)),
                ("extension_installed", json!(extension_installed)),
            ]),
        );
    }

    /// Click on the demo video link.
    pub fn track_youtube_click(&self, location: &str) {
        self.event(
            "Media",
            "YouTube Click",
            Some(location),
            None,
            props([("video_location", json!(location))]),
        );
    }

    /// Click on a generic call-to-action button.
    pub fn track_cta_click(&self, name: &str, location: &str) {
        self.event(
            "CTA",
            "CTA Click",
            Some(name),
            None,
            props([("cta_name", json!(name)), ("cta_location", json!(location))]),
        );
    }

    /// A page section scrolled into view.
    pub fn track_section_view(&self, section: &str) {
        self.event(
            "Engagement",
            "Section View",
            Some(section),
            None,
            props([("section_name", json!(section))]),
        );
    }

    /// Interaction with a feature card in the showcase grid.
    pub fn track_feature_interaction(&self, feature: &str, interaction: &str) {
        self.event(
            "Engagement",
            "Feature Interaction",
            Some(feature),
            None,
            props([
                ("feature_name", json!(feature)),
                ("interaction_type", json!(interaction)),
            ]),
        );
    }

    /// FAQ accordion item toggled.
    pub fn track_faq_click(&self, question: &str, expanded: bool) {
        self.event(
            "FAQ",
            "FAQ Click",
            Some(question),
            None,
            props([
                ("faq_question", json!(question)),
                ("expanded", json!(expanded)),
            ]),
        );
    }

    /// Navbar link click.
    pub fn track_nav_click(&self, target: &str) {
        self.event(
            "Navigation",
            "Nav Click",
            Some(target),
            None,
            props([("nav_target", json!(target))]),
        );
    }

    /// Mobile hamburger menu opened or closed.
    pub fn track_mobile_menu(&self, opened: bool) {
        let state = if opened { "open" } else { "close" };
        self.event(
            "Navigation",
            "Mobile Menu",
            Some(state),
            None,
            props([("menu_state", json!(state))]),
        );
    }

    /// Footer link click.
    pub fn track_footer_link_click(&self, link: &str) {
        self.event(
            "Navigation",
            "Footer Link Click",
            Some(link),
            None,
            props([("link_name", json!(link))]),
        );
    }

    /// Contact form submitted.
    pub fn track_contact_submit(&self) {
        self.event(
            "Contact",
            "Contact Submit",
            Some("Contact Form"),
            None,
            Properties::new(),
        );
    }

    /// Reports whether the extension was detected on this page load.
    pub fn track_extension_status(&self, installed: bool) {
        let status = if installed { "installed" } else { "not_installed" };
        self.event(
            "Extension",
            "Extension Status",
            Some(status),
            None,
            props([("extension_installed", json!(installed))]),
        );
    }
}
