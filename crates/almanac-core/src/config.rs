use std::path::Path;

use anyhow::Result;
use config::Config;
use config::builder::{ConfigBuilder, DefaultState};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_DISPLAY_TIMEZONE, DEFAULT_MAX_DAYS, ENV_PREFIX};
use crate::error::{CoreError, CoreResult};
use crate::types::Granularity;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub expansion: ExpansionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpansionConfig {
    /// Timezone in which day boundaries are computed.
    pub display_timezone: String,
    /// Upper bound on local days walked per event; `0` disables the guard.
    pub max_days: u32,
    pub granularity: Granularity,
    pub increment: u32,
}

impl ExpansionConfig {
    /// ## Summary
    /// Returns the configured day guard, or `None` when it is disabled.
    #[must_use]
    pub const fn day_limit(&self) -> Option<u32> {
        if self.max_days == 0 {
            None
        } else {
            Some(self.max_days)
        }
    }

    /// ## Summary
    /// Checks values that deserialize fine but cannot drive an expansion.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` describing the first offending value.
    pub fn validate(&self) -> CoreResult<()> {
        if self.display_timezone.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "expansion.display_timezone must not be empty".to_string(),
            ));
        }

        if !self.granularity.accepts_increment(self.increment) {
            return Err(CoreError::ConfigError(format!(
                "expansion.increment {} is out of range for granularity `{}`",
                self.increment, self.granularity
            )));
        }

        Ok(())
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `config.toml` (if present) and environment variables.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or validating it fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// ## Summary
    /// Loads configuration like [`Settings::load`], reading the given file instead of
    /// `config.toml`. An explicitly named file must exist.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or validating it fails.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(CONFIG_FILE_NAME).required(false),
        };

        let settings = defaults()?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Validates every section.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` describing the first offending value.
    pub fn validate(&self) -> CoreResult<()> {
        self.expansion.validate()
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>> {
    Ok(Config::builder()
        .set_default("logging.level", "info")?
        .set_default("expansion.display_timezone", DEFAULT_DISPLAY_TIMEZONE)?
        .set_default("expansion.max_days", i64::from(DEFAULT_MAX_DAYS))?
        .set_default("expansion.granularity", Granularity::Day.as_str())?
        .set_default("expansion.increment", 1)?)
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(path: Option<&Path>) -> Result<Settings> {
    if let Err(error) = dotenvy::dotenv() {
        tracing::trace!(%error, "No .env file loaded");
    }

    Settings::load_from(path)
}
