//! Configuration loader with layered sources.

use crate::AppConfig;
use booking_core::BookingError;
use config::{Config, ConfigError, Environment, File};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default prefix of environment variable overrides.
pub const DEFAULT_ENV_PREFIX: &str = "BOOKING";

/// Configuration loader.
///
/// Configuration is loaded from multiple sources in order:
/// 1. `{dir}/default.toml` - Default values
/// 2. `{dir}/{environment}.toml` - Environment-specific overrides
/// 3. `{dir}/local.toml` - Local overrides, not committed
/// 4. Environment variables such as `BOOKING__OBSERVABILITY__LOG_LEVEL`
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    environment: Option<String>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a loader reading from the given directory.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            environment: None,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    /// Creates a loader reading from the default location (`./config`).
    #[must_use]
    pub fn from_default_location() -> Self {
        Self::new("./config")
    }

    /// Pins the environment instead of reading `BOOKING_ENVIRONMENT`.
    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Overrides the environment variable prefix.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Loads and validates the configuration.
    pub fn load(&self) -> Result<AppConfig, BookingError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment = self.environment.clone().unwrap_or_else(|| {
            std::env::var(format!("{}_ENVIRONMENT", self.env_prefix))
                .unwrap_or_else(|_| "development".to_string())
        });

        info!(
            config_dir = %self.config_dir.display(),
            "Loading configuration for environment: {}", environment
        );

        let mut builder = Config::builder();
        for name in ["default", environment.as_str(), "local"] {
            let path = self.config_dir.join(format!("{name}.toml"));
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path.as_path()).required(false));
            }
        }

        builder = builder
            .set_override("app.environment", environment.clone())
            .map_err(config_error_to_booking_error)?
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .separator("__")
                    .try_parsing(true),
            );

        let app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error_to_booking_error)?;

        app_config.validate()?;

        Ok(app_config)
    }

    /// Returns the directory configuration files are read from.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

fn config_error_to_booking_error(err: ConfigError) -> BookingError {
    BookingError::Configuration(err.to_string())
}
