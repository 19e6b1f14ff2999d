//! Telemetry module for structured logging.
//!
//! Installs a `tracing-subscriber` registry with an env filter and a pretty or
//! JSON formatting layer. `RUST_LOG`, when set, overrides the configured level.

#[cfg(feature = "telemetry")]
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{BookingError, BookingResult};
use serde::{Deserialize, Serialize};

/// Log levels accepted in configuration.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Output format of the formatting layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Whether to install a subscriber at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Default log level when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format.
    #[serde(default)]
    pub log_format: LogFormat,

    /// Whether to include the event target in output.
    #[serde(default = "default_with_target")]
    pub with_target: bool,
}

fn default_enabled() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_with_target() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            with_target: default_with_target(),
        }
    }
}

impl TelemetryConfig {
    /// Checks that the configured level is one of [`LOG_LEVELS`].
    pub fn validate(&self) -> BookingResult<()> {
        if LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            Ok(())
        } else {
            Err(BookingError::configuration(format!(
                "Unknown log level '{}', expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )))
        }
    }
}

/// Initialize telemetry with the given configuration.
///
/// If a global subscriber is already installed (tests, embedding hosts) the
/// existing one is kept.
#[cfg(feature = "telemetry")]
pub fn init_telemetry(config: &TelemetryConfig) -> BookingResult<()> {
    if !config.enabled {
        return Ok(());
    }
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.to_lowercase()))
        .map_err(|e| BookingError::configuration(format!("Invalid log filter: {e}")))?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match config.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(config.with_target))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(config.with_target))
            .try_init(),
    };

    if installed.is_ok() {
        tracing::info!(
            log_level = %config.log_level,
            log_format = ?config.log_format,
            "Telemetry initialized"
        );
    } else {
        tracing::debug!("Global subscriber already set, keeping it");
    }

    Ok(())
}

/// Placeholder for when telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn init_telemetry(config: &TelemetryConfig) -> BookingResult<()> {
    if config.enabled {
        config.validate()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::default();
        assert!(config.enabled);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.with_target);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_level() {
        let config = TelemetryConfig {
            log_level: "verbose".to_string(),
            ..TelemetryConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, BookingError::Configuration(_)));
        assert!(err.to_string().contains("verbose"));
    }

    #[test]
    fn test_validate_is_case_insensitive() {
        let config = TelemetryConfig {
            log_level: "DEBUG".to_string(),
            ..TelemetryConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_format_deserialization() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, LogFormat::Json);
        assert!(serde_json::from_str::<LogFormat>("\"xml\"").is_err());
    }

    #[test]
    fn test_init_telemetry_can_run_twice() {
        let config = TelemetryConfig::default();
        assert!(init_telemetry(&config).is_ok());
        assert!(init_telemetry(&config).is_ok());
    }

    #[test]
    fn test_init_telemetry_disabled_skips_validation() {
        let config = TelemetryConfig {
            enabled: false,
            log_level: "verbose".to_string(),
            ..TelemetryConfig::default()
        };
        assert!(init_telemetry(&config).is_ok());
    }
}
