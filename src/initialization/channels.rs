//! Channel initialization.
//!
//! Each channel is configured independently from its credential. A missing or
//! empty credential is a supported deployment, not an error: the channel
//! initializer logs a diagnostic and returns `None`, which degrades every
//! subsequent send on that channel to a guarded no-op.

use serde_json::json;

use crate::config::PLATFORM_TAG;
use crate::sink::{
    LogMeasurementSink, LogProjectSink, MeasurementSink, ProjectSink, Properties,
};

/// Configures the measurement (page-view-centric) channel.
///
/// The sink is tagged with the platform dimension that distinguishes
/// landing-page traffic from the extension-embedded surface, and automatic
/// page-view emission is enabled.
pub fn init_measurement_channel(measurement_id: &str) -> Option<Box<dyn MeasurementSink>> {
    if measurement_id.trim().is_empty() {
        log::warn!("Measurement id is not provided; measurement channel disabled");
        return None;
    }
    Some(Box::new(LogMeasurementSink::new(
        measurement_id,
        PLATFORM_TAG,
    )))
}

/// Configures the project (keyed-property) channel.
///
/// Automatic page-view emission stays disabled on this channel - the session
/// bootstrap emits page views explicitly to control timing and enrichment.
/// The platform and build-environment tags are registered as super-properties
/// attached to every subsequent event.
pub fn init_project_channel(token: &str, environment: &str) -> Option<Box<dyn ProjectSink>> {
    if token.trim().is_empty() {
        log::warn!("Project token is not provided; project channel disabled");
        return None;
    }
    let sink = LogProjectSink::new(token);

    let mut super_properties = Properties::new();
    super_properties.insert("platform".into(), json!(PLATFORM_TAG));
    super_properties.insert("environment".into(), json!(environment));
    if let Err(e) = sink.register_super_properties(&super_properties) {
        log::warn!("Failed to register project super-properties: {}", e);
    }

    Some(Box::new(sink))
}
