pub mod model;

use anyhow::{Context, Result};
use std::path::PathBuf;

pub use model::{AppConfig, ConfigError, LoggingConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("daycounter")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("Invalid config in {}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig =
        toml::from_str(contents).with_context(|| "Failed to parse config file")?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::{Variant, DEFAULT_DATE_FORMAT};

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.counter.variant, Variant::Slider);
        assert_eq!(cfg.ui.date_format, DEFAULT_DATE_FORMAT);
        assert_eq!(cfg.ui.tick_rate_ms, 250);
        assert!(cfg.ui.mouse);
        assert!(!cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_partial_config() {
        let cfg = parse_config(
            r#"
            [counter]
            variant = "buttons"

            [ui]
            date_format = "%Y-%m-%d"

            [logging]
            enabled = true
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.counter.variant, Variant::Buttons);
        assert_eq!(cfg.ui.date_format, "%Y-%m-%d");
        assert_eq!(cfg.ui.tick_rate_ms, 250);
        assert!(cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse_config("[counter]\nvariant = \"dial\"").is_err());
        assert!(parse_config("[ui]\ndate_format = \"%Q\"").is_err());
        assert!(parse_config("[ui]\ndate_format = \"%H:%M\"").is_err());
        assert!(parse_config("[ui]\ndate_format = \"%Y %z\"").is_err());
        assert!(parse_config("[ui]\ndate_format = \"\"").is_err());
        assert!(parse_config("[ui]\ntick_rate_ms = 0").is_err());
        assert!(parse_config("[logging]\nlevel = \"loud\"").is_err());
    }

    #[test]
    fn test_config_error_is_typed() {
        let mut cfg = AppConfig::default();
        cfg.ui.tick_rate_ms = 0;
        assert!(matches!(cfg.validate(), Err(ConfigError::ZeroTickRate)));
    }
}
