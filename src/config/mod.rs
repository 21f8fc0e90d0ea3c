//! Beacon configuration and constants.
//!
//! This module provides:
//! - Configuration constants (channel tags, milestones, timer intervals)
//! - Configuration types and environment ingestion

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{BeaconConfig, LogFormat, LogLevel};
