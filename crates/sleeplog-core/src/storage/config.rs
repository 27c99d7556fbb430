//! TOML-based application configuration.
//!
//! Stores user preferences for the presentation layer:
//! - 12- vs 24-hour clock in the record list
//! - Fill/stroke colors for the weekly and monthly charts
//!
//! Configuration is stored at `<data_dir>/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{ConfigError, CoreError};

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Render start/end times on a 12-hour clock.
    #[serde(default = "default_true")]
    pub twelve_hour_clock: bool,
}

/// Chart color configuration. Colors are `#rrggbb` strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartsConfig {
    #[serde(default = "default_weekly_fill")]
    pub weekly_fill: String,
    #[serde(default = "default_weekly_stroke")]
    pub weekly_stroke: String,
    #[serde(default = "default_monthly_fill")]
    pub monthly_fill: String,
    #[serde(default = "default_monthly_stroke")]
    pub monthly_stroke: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub charts: ChartsConfig,
}

// Default functions
fn default_true() -> bool {
    true
}
fn default_weekly_fill() -> String {
    "#a5dfdf".into()
}
fn default_weekly_stroke() -> String {
    "#4bc0c0".into()
}
fn default_monthly_fill() -> String {
    "#ccb2ff".into()
}
fn default_monthly_stroke() -> String {
    "#9966ff".into()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            twelve_hour_clock: true,
        }
    }
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            weekly_fill: default_weekly_fill(),
            weekly_stroke: default_weekly_stroke(),
            monthly_fill: default_monthly_fill(),
            monthly_stroke: default_monthly_stroke(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            charts: ChartsConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, CoreError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing the default config on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, CoreError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path,
                    message: e.to_string(),
                })?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), CoreError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as a string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "ui.twelve_hour_clock" => Some(self.ui.twelve_hour_clock.to_string()),
            "charts.weekly_fill" => Some(self.charts.weekly_fill.clone()),
            "charts.weekly_stroke" => Some(self.charts.weekly_stroke.clone()),
            "charts.monthly_fill" => Some(self.charts.monthly_fill.clone()),
            "charts.monthly_stroke" => Some(self.charts.monthly_stroke.clone()),
            _ => None,
        }
    }

    /// Set a config value by key and persist. Unknown keys are rejected.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        match key {
            "ui.twelve_hour_clock" => {
                self.ui.twelve_hour_clock =
                    value.parse().map_err(|_| ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("cannot parse '{value}' as bool"),
                    })?;
            }
            "charts.weekly_fill" => self.charts.weekly_fill = value.to_string(),
            "charts.weekly_stroke" => self.charts.weekly_stroke = value.to_string(),
            "charts.monthly_fill" => self.charts.monthly_fill = value.to_string(),
            "charts.monthly_stroke" => self.charts.monthly_stroke = value.to_string(),
            _ => return Err(ConfigError::UnknownKey(key.to_string()).into()),
        }
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert!(parsed.ui.twelve_hour_clock);
        assert_eq!(parsed.charts.weekly_stroke, "#4bc0c0");
        assert_eq!(parsed.charts.monthly_stroke, "#9966ff");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert!(parsed.ui.twelve_hour_clock);
        assert_eq!(parsed.charts.weekly_fill, "#a5dfdf");
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("ui.twelve_hour_clock").as_deref(), Some("true"));
        assert_eq!(cfg.get("charts.monthly_fill").as_deref(), Some("#ccb2ff"));
        assert!(cfg.get("ui.missing_key").is_none());
    }

    #[test]
    fn set_rejects_unknown_key_without_touching_state() {
        let mut cfg = Config::default();
        assert!(cfg.set("charts.nonexistent", "#000000").is_err());
        assert_eq!(cfg.charts.weekly_fill, "#a5dfdf");
    }

    #[test]
    fn set_rejects_non_bool_for_clock() {
        let mut cfg = Config::default();
        assert!(cfg.set("ui.twelve_hour_clock", "maybe").is_err());
        assert!(cfg.ui.twelve_hour_clock);
    }
}
