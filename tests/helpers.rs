// Shared test helpers for building beacons and sessions over recording channels.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::sync::Arc;

use url::Url;

use comet_beacon::sink::{RecordingMeasurementSink, RecordingProjectSink};
use comet_beacon::{Beacon, PageSnapshot};

/// A desktop Chrome user agent.
#[allow(dead_code)] // Used by other test files
pub const DESKTOP_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// An iPhone Safari user agent.
#[allow(dead_code)] // Used by other test files
pub const MOBILE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";

/// Builds a page snapshot for the given URL with desktop defaults.
pub fn snapshot(url: &str) -> PageSnapshot {
    PageSnapshot {
        url: Url::parse(url).expect("test URL must parse"),
        title: "Comets AI - AI answers on every page".to_string(),
        referrer: Some("https://www.google.com/".to_string()),
        user_agent: DESKTOP_UA.to_string(),
        screen_width: 1920,
        screen_height: 1080,
    }
}

/// Builds a beacon over recording channels and returns handles to both
/// capture logs.
#[allow(dead_code)] // Used by other test files
pub fn recording_beacon(
    url: &str,
) -> (Arc<Beacon>, RecordingMeasurementSink, RecordingProjectSink) {
    let measurement = RecordingMeasurementSink::new();
    let project = RecordingProjectSink::new();
    let beacon = Arc::new(Beacon::new(
        Some(Box::new(measurement.clone())),
        Some(Box::new(project.clone())),
        snapshot(url),
    ));
    (beacon, measurement, project)
}
