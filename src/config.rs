//! Configuration loading.
//!
//! Settings come from `<config_dir>/platter/config.toml` when present, with
//! built-in defaults otherwise. A `--api-url` flag (or `PLATTER_API_URL`)
//! overrides the file.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::constants;

/// Runtime settings for the dashboard.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the REST backend.
    pub api_url: String,
    /// UI refresh rate in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: constants::DEFAULT_API_URL.to_string(),
            tick_rate_ms: constants::DEFAULT_TICK_RATE,
        }
    }
}

impl Config {
    /// Loads the config file if it exists, falling back to defaults.
    /// A malformed file is reported to the log and ignored.
    pub fn load() -> Self {
        let Some(path) = config_file_path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(config) => config,
                Err(err) => {
                    tracing::warn!("ignoring malformed config {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Applies a CLI/env override on top of the loaded settings.
    pub fn with_api_url_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        self
    }
}

/// Directory holding the config file and the log file.
pub fn app_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(constants::CONFIG_DIR_NAME))
}

fn config_file_path() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join(constants::CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, constants::DEFAULT_API_URL);
        assert_eq!(config.tick_rate_ms, constants::DEFAULT_TICK_RATE);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config: Config = toml::from_str(r#"api_url = "http://menu.local:8080""#).expect("toml");
        assert_eq!(config.api_url, "http://menu.local:8080");
        assert_eq!(config.tick_rate_ms, constants::DEFAULT_TICK_RATE);
    }

    #[test]
    fn test_cli_override_wins() {
        let config = Config::default()
            .with_api_url_override(Some("http://other:1234".to_string()));
        assert_eq!(config.api_url, "http://other:1234");
    }

    #[test]
    fn test_no_override_keeps_loaded_value() {
        let config = Config::default().with_api_url_override(None);
        assert_eq!(config.api_url, constants::DEFAULT_API_URL);
    }
}
