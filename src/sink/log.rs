//! Log-backed sinks.
//!
//! The production-default sinks serialize every outbound payload to a single
//! JSON line and hand it to the `log` facade under the `comet_beacon::wire`
//! target. Deployments wire a real backend by implementing the sink traits;
//! these implementations reproduce the exact shapes such a backend would
//! receive, which also makes the wire traffic inspectable with `RUST_LOG`.

use std::sync::Mutex;

use serde_json::{json, Map, Value};

use super::{MeasurementSink, ProjectSink, Properties};
use crate::error_handling::SinkError;

/// Log target for outbound wire payloads.
const WIRE_TARGET: &str = "comet_beacon::wire";

fn emit_line(payload: &Value) -> Result<(), SinkError> {
    let line = serde_json::to_string(payload)?;
    log::debug!(target: WIRE_TARGET, "{}", line);
    Ok(())
}

fn properties_object(properties: &Properties) -> Value {
    Value::Object(
        properties
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<Map<String, Value>>(),
    )
}

/// Measurement-channel sink writing JSON lines through `log`.
pub struct LogMeasurementSink {
    measurement_id: String,
    platform: String,
}

impl LogMeasurementSink {
    /// Creates a sink tagged with the given measurement id and platform
    /// dimension. Automatic page-view emission is enabled on this channel;
    /// the session bootstrap drives the page view itself.
    pub fn new(measurement_id: &str, platform: &str) -> Self {
        log::info!(
            "Measurement channel configured (id: {}, platform: {}, auto page views enabled)",
            measurement_id,
            platform
        );
        Self {
            measurement_id: measurement_id.to_string(),
            platform: platform.to_string(),
        }
    }
}

impl MeasurementSink for LogMeasurementSink {
    fn send_page_view(&self, path: &str, title: &str) -> Result<(), SinkError> {
        emit_line(&json!({
            "type": "pageview",
            "measurement_id": self.measurement_id,
            "platform": self.platform,
            "page": path,
            "title": title,
        }))
    }

    fn send_event(
        &self,
        category: &str,
        action: &str,
        label: Option<&str>,
        value: Option<i64>,
    ) -> Result<(), SinkError> {
        emit_line(&json!({
            "type": "event",
            "measurement_id": self.measurement_id,
            "platform": self.platform,
            "category": category,
            "action": action,
            "label": label,
            "value": value,
        }))
    }
}

/// Project-channel sink writing JSON lines through `log`.
///
/// Registered super-properties are merged under every tracked event, with the
/// event's own properties taking precedence, mirroring how keyed-property
/// backends apply them.
pub struct LogProjectSink {
    token: String,
    super_properties: Mutex<Properties>,
}

impl LogProjectSink {
    /// Creates a sink keyed by the given project token. This channel never
    /// emits page views on its own; the caller sends them explicitly to
    /// control timing and enrichment.
    pub fn new(token: &str) -> Self {
        log::info!(
            "Project channel configured (token: {}, auto page views disabled)",
            token
        );
        Self {
            token: token.to_string(),
            super_properties: Mutex::new(Properties::new()),
        }
    }
}

impl ProjectSink for LogProjectSink {
    fn track(&self, name: &str, properties: &Properties) -> Result<(), SinkError> {
        let mut merged = self
            .super_properties
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        merged.extend(properties.iter().map(|(k, v)| (k.clone(), v.clone())));
        emit_line(&json!({
            "type": "track",
            "token": self.token,
            "event": name,
            "properties": properties_object(&merged),
        }))
    }

    fn register_super_properties(&self, properties: &Properties) -> Result<(), SinkError> {
        self.super_properties
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .extend(properties.iter().map(|(k, v)| (k.clone(), v.clone())));
        emit_line(&json!({
            "type": "register",
            "token": self.token,
            "properties": properties_object(properties),
        }))
    }

    fn set_people_properties(&self, properties: &Properties) -> Result<(), SinkError> {
        emit_line(&json!({
            "type": "people_set",
            "token": self.token,
            "properties": properties_object(properties),
        }))
    }
}
