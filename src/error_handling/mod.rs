//! Error handling and emission accounting.
//!
//! This module provides:
//! - Typed errors for initialization and sink delivery
//! - Thread-safe delivered/dropped counters with a diagnostic summary

mod stats;
mod types;

pub use stats::EmissionStats;
pub use types::{DeliveryKind, DropReason, InitializationError, SinkError};
