//! Configuration types.
//!
//! This module defines the enums and structs used to configure the beacon
//! layer at session start.

use std::time::Duration;

use crate::config::constants::{
    DEFAULT_ENVIRONMENT, ENV_ENVIRONMENT, ENV_MEASUREMENT_ID, ENV_PROJECT_TOKEN,
    MARKER_RECHECK_DELAY, SCROLL_DEBOUNCE,
};

/// Logging level for the crate's diagnostics.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Beacon configuration.
///
/// Constructed programmatically or from the environment via
/// [`BeaconConfig::from_env`]. Both channel credentials are optional; a
/// missing or empty credential leaves that channel inert, and with both
/// absent every tracking call is a guarded no-op.
///
/// # Examples
///
/// ```no_run
/// use comet_beacon::BeaconConfig;
///
/// let config = BeaconConfig {
///     measurement_id: Some("G-TEST123".into()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct BeaconConfig {
    /// Measurement-channel id (page-view centric channel). `None` or empty
    /// disables the channel.
    pub measurement_id: Option<String>,

    /// Project-channel token (keyed-property channel). `None` or empty
    /// disables the channel.
    pub project_token: Option<String>,

    /// Build-environment tag registered as a super-property on the project
    /// channel.
    pub environment: String,

    /// Quiet period used to coalesce scroll notification bursts.
    pub scroll_debounce: Duration,

    /// Delay before the extension marker attribute is polled a second time.
    pub marker_recheck_delay: Duration,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for BeaconConfig {
    fn default() -> Self {
        Self {
            measurement_id: None,
            project_token: None,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            scroll_debounce: SCROLL_DEBOUNCE,
            marker_recheck_delay: MARKER_RECHECK_DELAY,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl BeaconConfig {
    /// Builds a configuration from the deploy-time environment.
    ///
    /// Reads `BEACON_MEASUREMENT_ID`, `BEACON_PROJECT_TOKEN`, and
    /// `BEACON_ENVIRONMENT`. Unset or empty variables fall back to the
    /// defaults; this function never fails — absent analytics configuration
    /// is a supported deployment, not an error.
    pub fn from_env() -> Self {
        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        Self {
            measurement_id: non_empty(ENV_MEASUREMENT_ID),
            project_token: non_empty(ENV_PROJECT_TOKEN),
            environment: non_empty(ENV_ENVIRONMENT)
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        // Test all LogLevel variants convert correctly to log::LevelFilter
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = BeaconConfig::default();
        assert!(config.measurement_id.is_none());
        assert!(config.project_token.is_none());
        assert_eq!(config.environment, "production");
        assert_eq!(config.scroll_debounce, Duration::from_millis(150));
        assert_eq!(config.marker_recheck_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_from_env_blank_token_is_none() {
        // Empty strings in the environment must behave like absent variables,
        // otherwise a misconfigured deploy would half-enable a channel.
        std::env::set_var(ENV_PROJECT_TOKEN, "   ");
        let config = BeaconConfig::from_env();
        assert!(config.project_token.is_none());
        std::env::remove_var(ENV_PROJECT_TOKEN);
    }
}
