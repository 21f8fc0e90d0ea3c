//! Outbound analytics sinks.
//!
//! Two sink traits model the two tracking backends the landing page reports
//! to: a page-view-oriented *measurement* channel (category/action/label/value
//! events keyed by a measurement id) and a keyed-property *project* channel
//! (named events with arbitrary properties, super-properties, and people
//! properties, keyed by a project token). The shapes these traits carry are
//! the wire contract; any backend substitute that implements them receives
//! identical traffic.
//!
//! Sends are fire-and-forget from the emission layer's point of view: a
//! [`SinkError`] is logged and counted, never propagated and never retried.

mod log;
mod recording;

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error_handling::SinkError;

pub use self::log::{LogMeasurementSink, LogProjectSink};
pub use recording::{
    RecordedCall, RecordedHit, RecordingMeasurementSink, RecordingProjectSink,
};

/// Keyed event properties forwarded to the project channel.
///
/// Ordered so serialized payloads are stable for logging and tests.
pub type Properties = BTreeMap<String, Value>;

/// Page-view-oriented sink (measurement channel).
pub trait MeasurementSink: Send + Sync {
    /// Sends a page view for the given path and resolved title.
    fn send_page_view(&self, path: &str, title: &str) -> Result<(), SinkError>;

    /// Sends a structured event.
    fn send_event(
        &self,
        category: &str,
        action: &str,
        label: Option<&str>,
        value: Option<i64>,
    ) -> Result<(), SinkError>;
}

/// Keyed-property sink (project channel).
///
/// The anonymous visitor identity events attach to is managed by the backend
/// itself; the crate only supplies properties and events.
pub trait ProjectSink: Send + Sync {
    /// Sends a named event with the given properties.
    fn track(&self, name: &str, properties: &Properties) -> Result<(), SinkError>;

    /// Registers default properties attached to every subsequent event from
    /// this channel.
    fn register_super_properties(&self, properties: &Properties) -> Result<(), SinkError>;

    /// Sets durable properties on the visitor's people profile. The anonymous
    /// visitor identifier they attach to is owned by the backend; this crate
    /// never generates or stores one.
    fn set_people_properties(&self, properties: &Properties) -> Result<(), SinkError>;
}
