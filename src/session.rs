//! Session context capture.
//!
//! This module derives the one-time bundle of device and browser facts that
//! accompanies outbound identification: user agent, device class, screen
//! dimensions, and the first-visit timestamp.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use strum_macros::Display;

use crate::page::PageSnapshot;

/// Indicators that classify a user agent as a mobile device.
///
/// Matched case-insensitively as whole words. Anything that doesn't match is
/// treated as desktop; the classification is binary by contract.
static MOBILE_UA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r"(?i)\b(android|iphone|ipad|ipod|mobile|blackberry|windows phone|opera mini|iemobile)\b",
        "MOBILE_UA_PATTERN",
    )
});

/// Helper function to safely compile a regex pattern, panicking with a detailed
/// error message if compilation fails. Used for static patterns that are
/// compile-time constants.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

/// Binary device classification derived from the user agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum DeviceClass {
    /// User agent matched a mobile indicator.
    Mobile,
    /// Everything else.
    Desktop,
}

impl DeviceClass {
    /// Classifies a user-agent string.
    pub fn from_user_agent(user_agent: &str) -> Self {
        if MOBILE_UA_PATTERN.is_match(user_agent) {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

/// One-time-computed bundle of device and browser facts.
///
/// Immutable after creation for the page lifetime. Turned into
/// people-properties when the project channel identifies the session; the
/// anonymous visitor identifier itself is owned by the analytics backend and
/// is not stored here.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Browser user-agent string.
    pub user_agent: String,
    /// Mobile or desktop, from user-agent matching.
    pub device_class: DeviceClass,
    /// Screen width in CSS pixels.
    pub screen_width: u32,
    /// Screen height in CSS pixels.
    pub screen_height: u32,
    /// Timestamp of this session's first visit.
    pub first_visit: DateTime<Utc>,
}

impl SessionContext {
    /// Captures the session context from a page snapshot.
    pub fn capture(snapshot: &PageSnapshot) -> Self {
        Self {
            user_agent: snapshot.user_agent.clone(),
            device_class: DeviceClass::from_user_agent(&snapshot.user_agent),
            screen_width: snapshot.screen_width,
            screen_height: snapshot.screen_height,
            first_visit: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
    const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Mobile Safari/537.36";

    #[test]
    fn test_desktop_classification() {
        assert_eq!(
            DeviceClass::from_user_agent(DESKTOP_UA),
            DeviceClass::Desktop
        );
    }

    #[test]
    fn test_mobile_classification() {
        assert_eq!(DeviceClass::from_user_agent(IPHONE_UA), DeviceClass::Mobile);
        assert_eq!(
            DeviceClass::from_user_agent(ANDROID_UA),
            DeviceClass::Mobile
        );
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(
            DeviceClass::from_user_agent("SOMETHING ANDROID SOMETHING"),
            DeviceClass::Mobile
        );
    }

    #[test]
    fn test_empty_user_agent_is_desktop() {
        // Unknown is desktop; the classification is binary by contract.
        assert_eq!(DeviceClass::from_user_agent(""), DeviceClass::Desktop);
    }

    #[test]
    fn test_device_class_display() {
        assert_eq!(DeviceClass::Mobile.to_string(), "mobile");
        assert_eq!(DeviceClass::Desktop.to_string(), "desktop");
    }

    #[test]
    fn test_capture_from_snapshot() {
        let snapshot = PageSnapshot {
            url: url::Url::parse("https://cometsai.app/").unwrap(),
            title: "Comets AI".to_string(),
            referrer: Some("https://google.com/".to_string()),
            user_agent: IPHONE_UA.to_string(),
            screen_width: 390,
            screen_height: 844,
        };
        let session = SessionContext::capture(&snapshot);
        assert_eq!(session.device_class, DeviceClass::Mobile);
        assert_eq!(session.screen_width, 390);
        assert_eq!(session.screen_height, 844);
        assert_eq!(session.user_agent, IPHONE_UA);
    }
}
