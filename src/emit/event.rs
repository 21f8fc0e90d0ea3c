//! Tracking event value object.

use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use crate::page::PageSnapshot;
use crate::sink::Properties;

/// A single tracking event, created per user interaction or lifecycle moment,
/// forwarded to both channels, then discarded.
#[derive(Debug, Clone, Serialize)]
pub struct TrackingEvent {
    /// Event category (e.g. `"CTA"`, `"Engagement"`).
    pub category: String,
    /// Event action; doubles as the event name on the project channel.
    pub action: String,
    /// Optional descriptive label.
    pub label: Option<String>,
    /// Optional numeric value (e.g. a scroll-depth percentage).
    pub value: Option<i64>,
    /// Call-site-specific extra properties, forwarded to the project channel.
    pub extra: Properties,
}

impl TrackingEvent {
    /// Builds the enriched property map for the project channel: the base
    /// fields (category, label, value), the current URL and path, and a fresh
    /// timestamp, with `extra` merged in last.
    ///
    /// Extras override base fields on key collision - they carry the more
    /// specific call-site knowledge.
    pub fn project_properties(&self, page: &PageSnapshot) -> Properties {
        let mut properties = Properties::new();
        properties.insert("category".into(), json!(self.category));
        if let Some(label) = &self.label {
            properties.insert("label".into(), json!(label));
        }
        if let Some(value) = self.value {
            properties.insert("value".into(), json!(value));
        }
        properties.insert("page_url".into(), json!(page.url.as_str()));
        properties.insert("page_path".into(), json!(page.path()));
        properties.insert("timestamp".into(), json!(Utc::now().timestamp_millis()));
        properties.extend(self.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn page() -> PageSnapshot {
        PageSnapshot {
            url: Url::parse("https://cometsai.app/?utm_source=store").unwrap(),
            title: "Comets AI".to_string(),
            referrer: None,
            user_agent: "test".to_string(),
            screen_width: 1920,
            screen_height: 1080,
        }
    }

    fn event(extra: Properties) -> TrackingEvent {
        TrackingEvent {
            category: "CTA".to_string(),
            action: "Chrome Web Store Click".to_string(),
            label: Some("hero".to_string()),
            value: None,
            extra,
        }
    }

    #[test]
    fn test_base_fields_present() {
        let properties = event(Properties::new()).project_properties(&page());
        assert_eq!(properties.get("category"), Some(&json!("CTA")));
        assert_eq!(properties.get("label"), Some(&json!("hero")));
        assert!(properties.get("value").is_none());
        assert_eq!(
            properties.get("page_url"),
            Some(&json!("https://cometsai.app/?utm_source=store"))
        );
        assert_eq!(properties.get("page_path"), Some(&json!("/")));
        assert!(properties.get("timestamp").is_some());
    }

    #[test]
    fn test_extras_merged() {
        let mut extra = Properties::new();
        extra.insert("cta_location".into(), json!("hero"));
        extra.insert("extension_installed".into(), json!(false));
        let properties = event(extra).project_properties(&page());
        assert_eq!(properties.get("cta_location"), Some(&json!("hero")));
        assert_eq!(properties.get("extension_installed"), Some(&json!(false)));
    }

    #[test]
    fn test_extras_override_base_fields() {
        let mut extra = Properties::new();
        extra.insert("category".into(), json!("Override"));
        let properties = event(extra).project_properties(&page());
        assert_eq!(properties.get("category"), Some(&json!("Override")));
    }
}
