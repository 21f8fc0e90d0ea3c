//! Recording sinks.
//!
//! Capture implementations of both sink traits used by the integration suite
//! and handy for local debugging: every call is appended to an in-memory log
//! that tests inspect afterwards. An injected failure mode exercises the
//! emission layer's absorb-and-count behavior.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::{MeasurementSink, ProjectSink, Properties};
use crate::error_handling::SinkError;

/// A call captured by [`RecordingMeasurementSink`].
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)] // Field names mirror the sink trait parameters
pub enum RecordedHit {
    PageView {
        path: String,
        title: String,
    },
    Event {
        category: String,
        action: String,
        label: Option<String>,
        value: Option<i64>,
    },
}

/// A call captured by [`RecordingProjectSink`].
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)] // Field names mirror the sink trait parameters
pub enum RecordedCall {
    Track { name: String, properties: Properties },
    Register(Properties),
    PeopleSet(Properties),
}

struct RecorderState<T> {
    calls: Mutex<Vec<T>>,
    failing: AtomicBool,
}

impl<T> Default for RecorderState<T> {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        }
    }
}

impl<T: Clone> RecorderState<T> {
    fn push(&self, call: T) -> Result<(), SinkError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(SinkError::Delivery("injected recording failure".into()));
        }
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(call);
        Ok(())
    }

    fn snapshot(&self) -> Vec<T> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

/// Measurement-channel sink that records every call.
///
/// Cloning shares the underlying capture log, so a test can keep a handle
/// while the beacon owns the boxed sink.
#[derive(Clone, Default)]
pub struct RecordingMeasurementSink {
    state: Arc<RecorderState<RecordedHit>>,
}

impl RecordingMeasurementSink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls captured so far, in order.
    pub fn calls(&self) -> Vec<RecordedHit> {
        self.state.snapshot()
    }

    /// Makes every subsequent call fail with a delivery error.
    pub fn set_failing(&self, failing: bool) {
        self.state.failing.store(failing, Ordering::SeqCst);
    }
}

impl MeasurementSink for RecordingMeasurementSink {
    fn send_page_view(&self, path: &str, title: &str) -> Result<(), SinkError> {
        self.state.push(RecordedHit::PageView {
            path: path.to_string(),
            title: title.to_string(),
        })
    }

    fn send_event(
        &self,
        category: &str,
        action: &str,
        label: Option<&str>,
        value: Option<i64>,
    ) -> Result<(), SinkError> {
        self.state.push(RecordedHit::Event {
            category: category.to_string(),
            action: action.to_string(),
            label: label.map(str::to_string),
            value,
        })
    }
}

/// Project-channel sink that records every call.
#[derive(Clone, Default)]
pub struct RecordingProjectSink {
    state: Arc<RecorderState<RecordedCall>>,
}

impl RecordingProjectSink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls captured so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.snapshot()
    }

    /// Only the `track` calls, as `(name, properties)` pairs.
    pub fn tracked(&self) -> Vec<(String, Properties)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RecordedCall::Track { name, properties } => Some((name, properties)),
                _ => None,
            })
            .collect()
    }

    /// Makes every subsequent call fail with a delivery error.
    pub fn set_failing(&self, failing: bool) {
        self.state.failing.store(failing, Ordering::SeqCst);
    }
}

impl ProjectSink for RecordingProjectSink {
    fn track(&self, name: &str, properties: &Properties) -> Result<(), SinkError> {
        self.state.push(RecordedCall::Track {
            name: name.to_string(),
            properties: properties.clone(),
        })
    }

    fn register_super_properties(&self, properties: &Properties) -> Result<(), SinkError> {
        self.state.push(RecordedCall::Register(properties.clone()))
    }

    fn set_people_properties(&self, properties: &Properties) -> Result<(), SinkError> {
        self.state.push(RecordedCall::PeopleSet(properties.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_preserves_order() {
        let sink = RecordingMeasurementSink::new();
        sink.send_page_view("/", "Comets AI").unwrap();
        sink.send_event("CTA", "click", None, None).unwrap();

        let calls = sink.calls();
        assert_eq!(calls.len(), 2);
        assert!(matches!(calls[0], RecordedHit::PageView { .. }));
        assert!(matches!(calls[1], RecordedHit::Event { .. }));
    }

    #[test]
    fn test_clone_shares_capture_log() {
        let sink = RecordingProjectSink::new();
        let handle = sink.clone();
        sink.track("Page View", &Properties::new()).unwrap();
        assert_eq!(handle.calls().len(), 1);
    }

    #[test]
    fn test_injected_failure() {
        let sink = RecordingMeasurementSink::new();
        sink.set_failing(true);
        assert!(sink.send_page_view("/", "Comets AI").is_err());
        assert!(sink.calls().is_empty());

        sink.set_failing(false);
        assert!(sink.send_page_view("/", "Comets AI").is_ok());
        assert_eq!(sink.calls().len(), 1);
    }
}
