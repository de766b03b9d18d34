//! Dashboard configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{env, fs, io};
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api/v1/machines";

/// Environment variable overriding `baseUrl`.
pub const BASE_URL_ENV: &str = "EGUI_COMPLIANCE_BASE_URL";

const CONFIG_DIR: &str = "egui_compliance";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid config file {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("baseUrl must not be empty")]
    EmptyBaseUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    /// Full URL of the machines endpoint, used as is
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl DashboardConfig {
    /// `<config dir>/egui_compliance/config.json`, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Reads a JSON config file.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file cannot be read, is not valid JSON or
    /// fails validation.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let buf = fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: DashboardConfig =
            serde_json::from_slice(&buf).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        Ok(())
    }

    /// Defaults, then the file at `path` if it exists, then the environment.
    /// Problems are logged and never fatal.
    pub fn resolve(path: Option<&Path>) -> Self {
        let mut config = match path {
            Some(path) if path.exists() => match Self::load_from_file(path) {
                Ok(config) => {
                    info!(path = %path.display(), "Loaded config");
                    config
                }
                Err(e) => {
                    warn!(error = %e, "Ignoring config file, using defaults");
                    Self::default()
                }
            },
            _ => Self::default(),
        };

        if let Ok(url) = env::var(BASE_URL_ENV) {
            config.apply_base_url_override(&url);
        }
        config
    }

    /// Loads from the default location.
    pub fn load() -> Self {
        Self::resolve(Self::default_path().as_deref())
    }

    fn apply_base_url_override(&mut self, url: &str) {
        let url = url.trim();
        if url.is_empty() {
            warn!(var = BASE_URL_ENV, "Ignoring empty base URL override");
        } else {
            self.base_url = url.to_string();
        }
    }
}
