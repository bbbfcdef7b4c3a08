//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML. Every field has a
//! sensible default so the application works without a config file.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::counter::{date, DateFormatError, Variant, DEFAULT_DATE_FORMAT};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ui.date_format: {0}")]
    DateFormat(#[from] DateFormatError),
    #[error("ui.tick_rate_ms must be greater than zero")]
    ZeroTickRate,
    #[error("logging.level: unknown level `{0}`")]
    LogLevel(String),
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        date::validate_format(&self.ui.date_format)?;
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::LogLevel(self.logging.level.clone()));
        }
        Ok(())
    }
}

/// Which counter variant to show.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CounterConfig {
    #[serde(default)]
    pub variant: Variant,
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// strftime format for the displayed date.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// How often the current date is re-read.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            tick_rate_ms: default_tick_rate_ms(),
            mouse: true,
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}
fn default_tick_rate_ms() -> u64 {
    250
}
fn default_log_dir() -> String {
    "~/.local/share/daycounter/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
