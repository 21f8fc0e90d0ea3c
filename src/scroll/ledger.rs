//! Scroll-depth milestone ledger.

use crate::config::SCROLL_MILESTONES;

/// One fired/not-fired flag per milestone.
///
/// All flags start unfired; each transitions to fired exactly once and never
/// resets for the ledger's lifetime. The ledger is owned by its tracker
/// instance, so independent trackers (and tests) never share state.
#[derive(Debug, Default)]
pub struct ScrollLedger {
    fired: [bool; SCROLL_MILESTONES.len()],
}

impl ScrollLedger {
    /// Creates a ledger with every milestone unfired.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks every still-unfired milestone at or below `percentage` as fired
    /// and returns them in ascending order.
    pub fn cross(&mut self, percentage: u8) -> Vec<u8> {
        let mut newly_fired = Vec::new();
        for (i, &milestone) in SCROLL_MILESTONES.iter().enumerate() {
            if milestone <= percentage && !self.fired[i] {
                self.fired[i] = true;
                newly_fired.push(milestone);
            }
        }
        newly_fired
    }

    /// Whether the given milestone has fired.
    pub fn has_fired(&self, milestone: u8) -> bool {
        SCROLL_MILESTONES
            .iter()
            .position(|&m| m == milestone)
            .map(|i| self.fired[i])
            .unwrap_or(false)
    }
}
