//! Debounced scroll-depth tracking.
//!
//! The page layer forwards raw scroll notifications here; the tracker keeps
//! only the latest viewport measurements and evaluates them once the burst
//! has been quiet for the debounce interval. Evaluation fires one
//! `Engagement` / `Scroll Depth` event per newly crossed milestone, ascending,
//! at most once per milestone per page load.

mod ledger;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;

use crate::config::SCROLL_DEBOUNCE;
use crate::emit::Beacon;
use crate::page::{scroll_percentage, ViewportMetrics};
use crate::sink::Properties;
use crate::utils::CoalescingTimer;

pub use ledger::ScrollLedger;

struct SharedState {
    beacon: Arc<Beacon>,
    ledger: Mutex<ScrollLedger>,
    latest: Mutex<Option<ViewportMetrics>>,
}

/// Debounced, one-shot-per-milestone scroll-depth tracker.
///
/// The coalescing timer is the concurrency control: bursts collapse to one
/// evaluation and evaluations never overlap. [`detach`](Self::detach) is the
/// caller-visible cleanup; dropping the tracker cancels any pending
/// evaluation as well.
pub struct ScrollDepthTracker {
    shared: Arc<SharedState>,
    timer: CoalescingTimer,
    debounce: Duration,
}

impl ScrollDepthTracker {
    /// Creates a tracker with the default 150 ms debounce.
    pub fn new(beacon: Arc<Beacon>) -> Self {
        Self::with_debounce(beacon, SCROLL_DEBOUNCE)
    }

    /// Creates a tracker with a custom debounce interval.
    pub fn with_debounce(beacon: Arc<Beacon>, debounce: Duration) -> Self {
        Self {
            shared: Arc::new(SharedState {
                beacon,
                ledger: Mutex::new(ScrollLedger::new()),
                latest: Mutex::new(None),
            }),
            timer: CoalescingTimer::new(),
            debounce,
        }
    }

    /// Handles one scroll notification.
    ///
    /// Stores the measurements and (re)schedules the debounced evaluation;
    /// any notification burst inside the debounce window collapses to a
    /// single evaluation of the last measurements seen.
    pub fn on_scroll(&self, metrics: ViewportMetrics) {
        *self
            .shared
            .latest
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(metrics);

        let shared = Arc::clone(&self.shared);
        self.timer
            .schedule(self.debounce, move || evaluate(&shared));
    }

    /// Cancels any pending evaluation and stops tracking. Milestones already
    /// fired stay fired; re-attaching requires a new tracker.
    pub fn detach(&self) {
        self.timer.cancel();
    }
}

fn evaluate(shared: &SharedState) {
    let metrics = shared
        .latest
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .take();
    let Some(metrics) = metrics else {
        return;
    };

    let percentage = scroll_percentage(&metrics);
    let newly_fired = shared
        .ledger
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .cross(percentage);

    for milestone in newly_fired {
        let mut extra = Properties::new();
        extra.insert("scroll_percentage".into(), json!(percentage));
        let label = format!("{}%", milestone);
        shared.beacon.event(
            "Engagement",
            "Scroll Depth",
            Some(label.as_str()),
            Some(i64::from(milestone)),
            extra,
        );
    }
}
