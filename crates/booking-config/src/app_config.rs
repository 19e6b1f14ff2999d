//! Application configuration structures.

use booking_core::telemetry::TelemetryConfig;
use booking_core::BookingResult;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Logging configuration.
    #[serde(default)]
    pub observability: TelemetryConfig,
}

impl AppConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> BookingResult<()> {
        self.observability.validate()?;

        if self.is_verbose_in_production() {
            warn!(
                log_level = %self.observability.log_level,
                "Verbose logging enabled in production"
            );
        }

        Ok(())
    }

    /// Checks if trace or debug logging is configured for production.
    #[must_use]
    pub fn is_verbose_in_production(&self) -> bool {
        self.app.is_production()
            && matches!(
                self.observability.log_level.to_lowercase().as_str(),
                "trace" | "debug"
            )
    }
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "appointment-booking".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

impl AppMetadata {
    /// Checks if the application runs in production.
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking_core::telemetry::LogFormat;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.app.name, "appointment-booking");
        assert_eq!(config.app.environment, "development");
        assert!(!config.app.is_production());
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_log_level() {
        let mut config = AppConfig::default();
        config.observability.log_level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_verbose_production_is_allowed() {
        let mut config = AppConfig::default();
        config.app.environment = "production".to_string();
        config.observability.log_level = "debug".to_string();
        assert!(config.app.is_production());
        assert!(config.is_verbose_in_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_verbose_production_check_ignores_case() {
        let mut config = AppConfig::default();
        config.app.environment = "production".to_string();
        config.observability.log_level = "DEBUG".to_string();
        assert!(config.is_verbose_in_production());
        assert!(config.validate().is_ok());

        config.observability.log_level = "Trace".to_string();
        assert!(config.is_verbose_in_production());

        config.observability.log_level = "INFO".to_string();
        assert!(!config.is_verbose_in_production());
    }

    #[test]
    fn test_verbose_outside_production_is_not_flagged() {
        let mut config = AppConfig::default();
        config.observability.log_level = "debug".to_string();
        assert!(!config.is_verbose_in_production());
    }
}
