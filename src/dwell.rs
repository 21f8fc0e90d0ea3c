//! Time-on-page measurement.
//!
//! The tracker anchors an `Instant` when the session starts and reports the
//! rounded elapsed seconds once, at page exit. The report goes directly to
//! the project channel rather than through the shared event choke point:
//! unload-time delivery must be synchronous best-effort, and the enrichment
//! the choke point adds is not worth the extra work in that window.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::json;
use tokio::time::Instant;

use crate::config::TIME_ON_PAGE_EVENT;
use crate::emit::Beacon;
use crate::sink::Properties;

/// One-shot dwell-time reporter.
///
/// Anchored on the Tokio clock so paused-time tests measure deterministically.
pub struct TimeOnPageTracker {
    beacon: Arc<Beacon>,
    started: Instant,
    flushed: AtomicBool,
}

impl TimeOnPageTracker {
    /// Starts measuring now.
    pub fn new(beacon: Arc<Beacon>) -> Self {
        Self {
            beacon,
            started: Instant::now(),
            flushed: AtomicBool::new(false),
        }
    }

    /// Elapsed time since creation, rounded to whole seconds.
    pub fn elapsed_seconds(&self) -> u64 {
        self.started.elapsed().as_secs_f64().round() as u64
    }

    /// Emits the "Time on Page" event. The page-exit hook; at most one emit
    /// per tracker no matter how many unload signals the host delivers.
    pub fn flush(&self) {
        if self.flushed.swap(true, Ordering::SeqCst) {
            return;
        }
        let mut properties = Properties::new();
        properties.insert("seconds".into(), json!(self.elapsed_seconds()));
        properties.insert("page_path".into(), json!(self.beacon.page().path()));
        self.beacon.project_send(TIME_ON_PAGE_EVENT, &properties);
    }

    /// Caller-visible cleanup: marks the tracker flushed without emitting,
    /// for hosts that unregister their unload handler.
    pub fn disarm(&self) {
        self.flushed.store(true, Ordering::SeqCst);
    }
}
