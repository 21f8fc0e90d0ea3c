//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the crate,
//! including channel tags, scroll-depth milestones, and timer intervals.

use std::time::Duration;

/// Contextual tag attached to every outbound event from this surface.
///
/// Distinguishes landing-page traffic from the extension-embedded surface,
/// which reports with its own tag. Both channels carry it: the measurement
/// channel as a custom dimension at configuration time, the project channel
/// as a registered super-property.
pub const PLATFORM_TAG: &str = "website";

/// Build-environment tag registered on the project channel when no explicit
/// environment is configured.
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Scroll-depth milestones in percent, ascending.
///
/// Each milestone fires at most once per page load. A single jump from 0%
/// to 100% emits all four in this order.
pub const SCROLL_MILESTONES: [u8; 4] = [25, 50, 75, 100];

/// Quiet period after the last scroll notification before the milestone
/// evaluation runs. Any burst of scroll events inside this window collapses
/// to a single evaluation.
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(150);

/// Delay before the extension marker attribute is polled a second time.
///
/// The content script that writes the marker may be injected after the page
/// has already booted; one recheck about a second later covers that window.
pub const MARKER_RECHECK_DELAY: Duration = Duration::from_secs(1);

/// Event name used for page views on the project channel.
pub const PAGE_VIEW_EVENT: &str = "Page View";

/// Event name used for the unload-time dwell measurement on the project channel.
pub const TIME_ON_PAGE_EVENT: &str = "Time on Page";

// Environment variables read by `BeaconConfig::from_env`
/// Measurement-channel id (e.g. a GA4-style measurement id). Absent or empty
/// leaves the channel inert.
pub const ENV_MEASUREMENT_ID: &str = "BEACON_MEASUREMENT_ID";
/// Project-channel token (e.g. a Mixpanel-style project token). Absent or
/// empty leaves the channel inert.
pub const ENV_PROJECT_TOKEN: &str = "BEACON_PROJECT_TOKEN";
/// Build-environment tag override.
pub const ENV_ENVIRONMENT: &str = "BEACON_ENVIRONMENT";
