//! Error type definitions.
//!
//! This module defines all error and accounting types used throughout the
//! crate. Tracking functions themselves never surface errors to callers;
//! failures inside a sink are converted into [`DropReason`] counts.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for sink delivery.
///
/// Returned by [`MeasurementSink`](crate::MeasurementSink) and
/// [`ProjectSink`](crate::ProjectSink) implementations. The emission layer
/// absorbs these: a failed send is logged and counted, never propagated and
/// never retried.
#[derive(Error, Debug)]
pub enum SinkError {
    /// A payload could not be serialized into the sink's wire format.
    #[error("Payload serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The sink refused or failed to accept the payload.
    #[error("Sink delivery error: {0}")]
    Delivery(String),
}

/// Successful outbound sends, by channel and shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum DeliveryKind {
    /// Page view delivered to the measurement channel.
    MeasurementPageView,
    /// Structured event delivered to the measurement channel.
    MeasurementEvent,
    /// Keyed-property event delivered to the project channel.
    ProjectEvent,
}

/// Reasons an outbound send was suppressed or lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum DropReason {
    // Disabled-channel drops are expected in deployments without credentials
    /// Measurement channel not configured.
    MeasurementChannelDisabled,
    /// Project channel not configured.
    ProjectChannelDisabled,
    /// Measurement sink accepted the call but failed to deliver.
    MeasurementSinkError,
    /// Project sink accepted the call but failed to deliver.
    ProjectSinkError,
}
