//! Emission statistics tracking.
//!
//! This module provides thread-safe counters for delivered and dropped sends.
//! The counters exist for diagnostics only: a dropped event is not resubmitted,
//! and the summary is logged once at session end.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{DeliveryKind, DropReason};

/// Thread-safe emission statistics tracker.
///
/// Tracks successful sends and drops using atomic counters, allowing access
/// from the UI path and the timer tasks without locking. All kinds are
/// initialized to zero on creation.
pub struct EmissionStats {
    delivered: HashMap<DeliveryKind, AtomicUsize>,
    dropped: HashMap<DropReason, AtomicUsize>,
}

impl EmissionStats {
    /// Creates a tracker with all counters at zero.
    pub fn new() -> Self {
        let mut delivered = HashMap::new();
        for kind in DeliveryKind::iter() {
            delivered.insert(kind, AtomicUsize::new(0));
        }

        let mut dropped = HashMap::new();
        for reason in DropReason::iter() {
            dropped.insert(reason, AtomicUsize::new(0));
        }

        EmissionStats { delivered, dropped }
    }

    /// Increment a delivery counter.
    pub fn record_delivery(&self, kind: DeliveryKind) {
        if let Some(counter) = self.delivered.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment delivery counter for {:?} which is not in the map. \
                 This indicates a bug in EmissionStats initialization.",
                kind
            );
            // Don't panic - log and continue, the beacon must never disrupt the page
        }
    }

    /// Increment a drop counter.
    pub fn record_drop(&self, reason: DropReason) {
        if let Some(counter) = self.dropped.get(&reason) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment drop counter for {:?} which is not in the map. \
                 This indicates a bug in EmissionStats initialization.",
                reason
            );
        }
    }

    /// Get the count for a delivery kind.
    pub fn delivered_count(&self, kind: DeliveryKind) -> usize {
        self.delivered
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get the count for a drop reason.
    pub fn dropped_count(&self, reason: DropReason) -> usize {
        self.dropped
            .get(&reason)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total delivered sends across both channels.
    pub fn total_delivered(&self) -> usize {
        DeliveryKind::iter().map(|k| self.delivered_count(k)).sum()
    }

    /// Total dropped sends across all reasons.
    pub fn total_dropped(&self) -> usize {
        DropReason::iter().map(|r| self.dropped_count(r)).sum()
    }

    /// Logs a summary of emission statistics.
    ///
    /// Suppressed-channel drops are reported at debug level since they are the
    /// expected steady state of a deployment without analytics credentials.
    pub fn log_summary(&self) {
        log::info!(
            "Emission summary: {} delivered, {} dropped",
            self.total_delivered(),
            self.total_dropped()
        );
        for kind in DeliveryKind::iter() {
            let count = self.delivered_count(kind);
            if count > 0 {
                log::info!("  {:?}: {}", kind, count);
            }
        }
        for reason in DropReason::iter() {
            let count = self.dropped_count(reason);
            if count > 0 {
                log::debug!("  {:?}: {}", reason, count);
            }
        }
    }
}

impl Default for EmissionStats {
    fn default() -> Self {
        Self::new()
    }
}
