use crate::domain::options::DisplayOptions;
use crate::domain::pacing::BandPolicy;
use crate::error::{PacingError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Contents of a `campaign-pacing` TOML configuration file.
///
/// ```toml
/// [display]
/// currency = "EUR"
/// decimals = 2
///
/// [bands]
/// on_track = 5
/// escalation = 20
///
/// [logging]
/// level = "debug"
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub bands: Option<BandPolicy>,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency: Option<String>,
    pub decimals: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: LogFormat,
}

impl AppConfig {
    /// Reads and parses a configuration file. Unlike embedding options, a
    /// broken file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)
            .map_err(|e| PacingError::ConfigError(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Display options from this file layered over the defaults.
    pub fn display_options(&self) -> DisplayOptions {
        let mut options = DisplayOptions::default();
        if let Some(currency) = &self.display.currency {
            options = options.with_currency(currency);
        }
        if let Some(decimals) = self.display.decimals {
            options = options.with_decimals(decimals);
        }
        options
    }

    pub fn band_policy(&self) -> BandPolicy {
        self.bands.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_full_config() {
        let config = AppConfig::from_toml(
            r#"
            [display]
            currency = "gbp"
            decimals = 2

            [bands]
            on_track = 10
            escalation = 30

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        let options = config.display_options();
        assert_eq!(options.currency(), "GBP");
        assert_eq!(options.decimals(), 2);
        assert_eq!(config.band_policy().on_track, dec!(10));
        assert_eq!(config.band_policy().escalation, dec!(30));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.display_options(), DisplayOptions::default());
        assert_eq!(config.band_policy(), BandPolicy::default());
    }

    #[test]
    fn test_out_of_range_display_values_fall_back() {
        let config = AppConfig::from_toml("[display]\ncurrency = \"euro\"\ndecimals = 99").unwrap();
        assert_eq!(config.display_options(), DisplayOptions::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[display]").unwrap();
        writeln!(file, "currency = \"JPY\"").unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.display_options().currency(), "JPY");
    }

    #[test]
    fn test_load_rejects_broken_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[display").unwrap();
        assert!(matches!(
            AppConfig::load(file.path()),
            Err(PacingError::ConfigError(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            AppConfig::load(Path::new("does/not/exist.toml")),
            Err(PacingError::IoError(_))
        ));
    }
}
