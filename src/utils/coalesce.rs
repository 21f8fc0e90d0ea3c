//! Coalescing timer.
//!
//! A debounce primitive independent of any UI framework: each `schedule` call
//! cancels whatever was pending and re-arms the timer, so a burst of calls
//! collapses to the single action scheduled last, running once the burst has
//! been quiet for the full delay.

use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Timer that keeps at most one pending action.
///
/// Requires a Tokio runtime. Dropping the timer cancels any pending action.
pub struct CoalescingTimer {
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl CoalescingTimer {
    /// Creates a timer with nothing pending.
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(None),
        }
    }

    /// Schedules `action` to run after `delay`, cancelling any action that was
    /// already pending.
    pub fn schedule<F>(&self, delay: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        });

        let mut pending = self
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    /// Cancels the pending action, if any.
    pub fn cancel(&self) {
        let mut pending = self
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}

impl Default for CoalescingTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CoalescingTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
