//! Event shaping and dual-channel emission.
//!
//! [`Beacon`] is the process-wide facade all tracking routes through. It owns
//! the two optional channels, the immutable session context, and the emission
//! counters. Every event passes through [`Beacon::event`], which guarantees
//! both sinks see consistent base fields; a disabled channel turns the
//! corresponding send into a guarded no-op, and a sink failure is logged and
//! counted without ever reaching the caller. Analytics must never disrupt the
//! page.

mod event;
mod helpers;

use serde_json::json;

use crate::config::PAGE_VIEW_EVENT;
use crate::error_handling::{DeliveryKind, DropReason, EmissionStats};
use crate::page::PageSnapshot;
use crate::session::SessionContext;
use crate::sink::{MeasurementSink, ProjectSink, Properties};

pub use event::TrackingEvent;

/// Dual-channel analytics emitter for one page load.
pub struct Beacon {
    measurement: Option<Box<dyn MeasurementSink>>,
    project: Option<Box<dyn ProjectSink>>,
    session: SessionContext,
    page: PageSnapshot,
    stats: EmissionStats,
}

impl Beacon {
    /// Creates a beacon over the given channels and immediately identifies
    /// the session on the project channel (people properties derived from the
    /// session context).
    pub fn new(
        measurement: Option<Box<dyn MeasurementSink>>,
        project: Option<Box<dyn ProjectSink>>,
        page: PageSnapshot,
    ) -> Self {
        let session = SessionContext::capture(&page);
        let beacon = Self {
            measurement,
            project,
            session,
            page,
            stats: EmissionStats::new(),
        };
        beacon.identify_session();
        beacon
    }

    /// Session context captured at construction.
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Page snapshot this beacon reports for.
    pub fn page(&self) -> &PageSnapshot {
        &self.page
    }

    /// Emission counters for diagnostics.
    pub fn stats(&self) -> &EmissionStats {
        &self.stats
    }

    fn identify_session(&self) {
        let Some(project) = &self.project else {
            return;
        };
        let mut properties = Properties::new();
        properties.insert("user_agent".into(), json!(self.session.user_agent));
        properties.insert(
            "device_class".into(),
            json!(self.session.device_class.to_string()),
        );
        properties.insert("screen_width".into(), json!(self.session.screen_width));
        properties.insert("screen_height".into(), json!(self.session.screen_height));
        properties.insert(
            "first_visit".into(),
            json!(self.session.first_visit.to_rfc3339()),
        );
        if let Err(e) = project.set_people_properties(&properties) {
            log::warn!("Failed to set session people properties: {}", e);
            self.stats.record_drop(DropReason::ProjectSinkError);
        }
    }

    /// Tracks a page view on both channels.
    ///
    /// The measurement channel receives the path and resolved title (falling
    /// back to the document title). The project channel receives a richer
    /// "Page View" event carrying the full URL, referrer, and the query
    /// parameters captured verbatim.
    pub fn page_view(&self, path: &str, title: Option<&str>) {
        let resolved_title = title.unwrap_or(&self.page.title);

        match &self.measurement {
            Some(sink) => match sink.send_page_view(path, resolved_title) {
                Ok(()) => self.stats.record_delivery(DeliveryKind::MeasurementPageView),
                Err(e) => {
                    log::warn!("Measurement page view failed: {}", e);
                    self.stats.record_drop(DropReason::MeasurementSinkError);
                }
            },
            None => self
                .stats
                .record_drop(DropReason::MeasurementChannelDisabled),
        }

        let mut properties = Properties::new();
        properties.insert("page_path".into(), json!(path));
        properties.insert("page_title".into(), json!(resolved_title));
        properties.insert("page_url".into(), json!(self.page.url.as_str()));
        if let Some(referrer) = &self.page.referrer {
            properties.insert("referrer".into(), json!(referrer));
        }
        properties.insert("query_params".into(), json!(self.page.query_params()));
        self.project_send(PAGE_VIEW_EVENT, &properties);
    }

    /// The single choke point all tracking routes through.
    ///
    /// Forwards category/action/label/value to the measurement channel, then
    /// a duplicate enriched event (named after `action`) to the project
    /// channel. The measurement send is always issued first; callers may rely
    /// on that for interleaved debugging, but not on delivery order at the
    /// backends. Extra properties override base fields on key collision.
    pub fn event(
        &self,
        category: &str,
        action: &str,
        label: Option<&str>,
        value: Option<i64>,
        extra: Properties,
    ) {
        match &self.measurement {
            Some(sink) => match sink.send_event(category, action, label, value) {
                Ok(()) => self.stats.record_delivery(DeliveryKind::MeasurementEvent),
                Err(e) => {
                    log::warn!("Measurement event '{}' failed: {}", action, e);
                    self.stats.record_drop(DropReason::MeasurementSinkError);
                }
            },
            None => self
                .stats
                .record_drop(DropReason::MeasurementChannelDisabled),
        }

        let tracking_event = TrackingEvent {
            category: category.to_string(),
            action: action.to_string(),
            label: label.map(str::to_string),
            value,
            extra,
        };
        let properties = tracking_event.project_properties(&self.page);
        self.project_send(action, &properties);
    }

    /// Sends an event to the project channel only, bypassing the choke
    /// point's enrichment. Used at unload time, where only synchronous
    /// best-effort delivery is reliable.
    pub(crate) fn project_send(&self, name: &str, properties: &Properties) {
        match &self.project {
            Some(sink) => match sink.track(name, properties) {
                Ok(()) => self.stats.record_delivery(DeliveryKind::ProjectEvent),
                Err(e) => {
                    log::warn!("Project event '{}' failed: {}", name, e);
                    self.stats.record_drop(DropReason::ProjectSinkError);
                }
            },
            None => self.stats.record_drop(DropReason::ProjectChannelDisabled),
        }
    }
}
