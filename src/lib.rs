//! comet_beacon: client-side analytics emission for the Comets AI landing page
//!
//! This library owns the landing page's tracking behavior: dual-channel event
//! shaping, scroll-depth milestone detection, time-on-page measurement, and
//! extension-install detection. The visual page is an external collaborator —
//! it forwards user interactions and scroll notifications here and reads a
//! single "extension installed" boolean back. Analytics are a side channel:
//! nothing in this crate panics or errors because of absent configuration or
//! a failing backend.
//!
//! # Example
//!
//! ```no_run
//! use comet_beacon::{start_session, BeaconConfig, NoMarker, PageSnapshot};
//! use std::sync::Arc;
//! use url::Url;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BeaconConfig::from_env();
//! let snapshot = PageSnapshot {
//!     url: Url::parse("https://cometsai.app/?installed=true")?,
//!     title: "Comets AI".into(),
//!     referrer: None,
//!     user_agent: "Mozilla/5.0 ...".into(),
//!     screen_width: 1920,
//!     screen_height: 1080,
//! };
//!
//! let session = start_session(config, snapshot, Arc::new(NoMarker))?;
//! session.beacon().track_chrome_store_click("hero", session.extension_installed());
//! session.end();
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime for its debounce and recheck timers.
//! Use `#[tokio::main]` in your application or ensure you're calling
//! [`start_session`] within an async context.

#![warn(missing_docs)]

pub mod config;
mod dwell;
mod emit;
mod error_handling;
pub mod initialization;
mod install;
mod page;
mod scroll;
mod session;
pub mod sink;
mod utils;

// Re-export public API
pub use bootstrap::{start_session, start_session_with_channels, PageSession};
pub use config::{BeaconConfig, LogFormat, LogLevel};
pub use dwell::TimeOnPageTracker;
pub use emit::{Beacon, TrackingEvent};
pub use error_handling::{DeliveryKind, DropReason, EmissionStats, InitializationError, SinkError};
pub use install::{detect_installation, resolve_installation, MarkerSource, NoMarker};
pub use page::{scroll_percentage, PageSnapshot, ViewportMetrics};
pub use scroll::{ScrollDepthTracker, ScrollLedger};
pub use session::{DeviceClass, SessionContext};
pub use sink::{MeasurementSink, ProjectSink, Properties};
pub use utils::CoalescingTimer;

// Internal bootstrap module (contains the session wiring)
mod bootstrap {
    use std::sync::Arc;

    use anyhow::Result;
    use tokio::task::JoinHandle;
    use tokio_util::sync::CancellationToken;

    use crate::config::BeaconConfig;
    use crate::dwell::TimeOnPageTracker;
    use crate::emit::Beacon;
    use crate::initialization::{
        init_logger_with, init_measurement_channel, init_project_channel,
    };
    use crate::install::{resolve_installation, MarkerSource};
    use crate::page::PageSnapshot;
    use crate::scroll::ScrollDepthTracker;
    use crate::sink::{MeasurementSink, ProjectSink};

    /// A running page session: the beacon plus its attached trackers.
    ///
    /// Created by [`start_session`]; torn down by [`PageSession::end`], which
    /// simulates page exit (time-on-page flush, listener removal, stats
    /// summary).
    pub struct PageSession {
        beacon: Arc<Beacon>,
        scroll: ScrollDepthTracker,
        dwell: TimeOnPageTracker,
        extension_installed: bool,
        recheck_cancel: CancellationToken,
        recheck_task: Option<JoinHandle<()>>,
    }

    // Best-effort: the host may already own the process logger.
    fn ensure_logger(config: &BeaconConfig) {
        if let Err(e) = init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        {
            log::debug!("Logger already initialized: {}", e);
        }
    }

    /// Boots the analytics layer for one page load.
    ///
    /// Wires both channels from configuration (a missing credential leaves
    /// that channel inert), resolves the extension-install flag, identifies
    /// the session, fires the initial page view, reports extension status,
    /// and attaches the scroll-depth and time-on-page trackers.
    ///
    /// The install flag is computed exactly once here and never transitions.
    /// Because the extension's content script may write its marker after page
    /// boot, a single recheck runs after the configured delay and reports a
    /// late-appearing marker through the extension-status event; the flag
    /// returned by [`PageSession::extension_installed`] keeps its boot-time
    /// value.
    ///
    /// # Errors
    ///
    /// This function currently cannot fail after logger setup; the `Result`
    /// return keeps room for hosts that treat initialization diagnostics as
    /// fatal.
    pub fn start_session(
        config: BeaconConfig,
        snapshot: PageSnapshot,
        marker: Arc<dyn MarkerSource>,
    ) -> Result<PageSession> {
        ensure_logger(&config);
        let measurement = init_measurement_channel(config.measurement_id.as_deref().unwrap_or(""));
        let project = init_project_channel(
            config.project_token.as_deref().unwrap_or(""),
            &config.environment,
        );
        start_session_with_channels(config, snapshot, marker, measurement, project)
    }

    /// Boots the analytics layer over caller-supplied channels.
    ///
    /// [`start_session`] delegates here with the log-backed sinks; hosts that
    /// implement the sink traits against a real backend (and the test suite,
    /// with recording sinks) call this directly. Semantics are otherwise
    /// identical.
    pub fn start_session_with_channels(
        config: BeaconConfig,
        snapshot: PageSnapshot,
        marker: Arc<dyn MarkerSource>,
        measurement: Option<Box<dyn MeasurementSink>>,
        project: Option<Box<dyn ProjectSink>>,
    ) -> Result<PageSession> {
        ensure_logger(&config);

        let extension_installed = resolve_installation(&snapshot.url, marker.as_ref());

        let beacon = Arc::new(Beacon::new(measurement, project, snapshot));
        log::info!(
            "Page session started (path: {}, device: {}, extension installed: {})",
            beacon.page().path(),
            beacon.session().device_class,
            extension_installed
        );

        let path = beacon.page().path().to_string();
        beacon.page_view(&path, None);
        beacon.track_extension_status(extension_installed);

        let scroll = ScrollDepthTracker::with_debounce(Arc::clone(&beacon), config.scroll_debounce);
        let dwell = TimeOnPageTracker::new(Arc::clone(&beacon));

        let recheck_cancel = CancellationToken::new();
        let recheck_task = if extension_installed {
            None
        } else {
            let cancel = recheck_cancel.child_token();
            let beacon_for_recheck = Arc::clone(&beacon);
            let delay = config.marker_recheck_delay;
            Some(tokio::spawn(async move {
                tokio::select! {
                    _ = tokio::time::sleep(delay) => {
                        if marker.extension_marker() == Some(true) {
                            log::debug!("Extension marker appeared after load");
                            beacon_for_recheck.track_extension_status(true);
                        }
                    }
                    _ = cancel.cancelled() => {}
                }
            }))
        };

        Ok(PageSession {
            beacon,
            scroll,
            dwell,
            extension_installed,
            recheck_cancel,
            recheck_task,
        })
    }

    impl PageSession {
        /// The beacon all tracking calls route through.
        pub fn beacon(&self) -> &Arc<Beacon> {
            &self.beacon
        }

        /// Whether the extension was detected at session start. Computed once;
        /// never transitions during the session.
        pub fn extension_installed(&self) -> bool {
            self.extension_installed
        }

        /// The attached scroll-depth tracker; the page layer forwards scroll
        /// notifications to it.
        pub fn scroll(&self) -> &ScrollDepthTracker {
            &self.scroll
        }

        /// The attached time-on-page tracker, for hosts that need to flush on
        /// their own unload signal.
        pub fn dwell(&self) -> &TimeOnPageTracker {
            &self.dwell
        }

        /// Ends the session: flushes time on page, detaches the scroll
        /// tracker, cancels the marker recheck, and logs the emission summary.
        pub fn end(self) {
            self.dwell.flush();
            self.scroll.detach();
            self.recheck_cancel.cancel();
            if let Some(task) = self.recheck_task {
                task.abort();
            }
            self.beacon.stats().log_summary();
        }
    }
}
