use std::{collections::HashMap, fs, path::Path};

use thiserror::Error;
use tracing::warn;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const SETTINGS_FILE: &str = "sentiment.toml";
pub const API_BASE_URL_ENV_VARS: [&str; 2] = ["SENTIMENT_API_BASE_URL", "APP__API_BASE_URL"];

const ANALYZE_PATH: &str = "api/sentiment";
const HEALTH_PATH: &str = "api/health";
const STATS_PATH: &str = "api/stats";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid api base url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("api base url '{0}' cannot be used as a base for endpoint paths")]
    NotABase(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
        }
    }
}

impl Settings {
    /// Applies a front-end flag on top of file and environment values.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_base_url = url;
        }
        self
    }

    pub fn endpoints(&self) -> Result<Endpoints, SettingsError> {
        Endpoints::from_base(&self.api_base_url)
    }
}

/// Defaults, then `sentiment.toml` in the working directory, then env vars.
pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<HashMap<String, String>>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("api_base_url") {
                    settings.api_base_url = v.clone();
                }
            }
            Err(err) => {
                warn!("ignoring unreadable settings file '{}': {err}", path.display());
            }
        }
    }

    for key in API_BASE_URL_ENV_VARS {
        if let Some(v) = env(key) {
            settings.api_base_url = v;
        }
    }

    settings
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub analyze: Url,
    pub health: Url,
    pub stats: Url,
}

impl Endpoints {
    pub fn from_base(raw_base_url: &str) -> Result<Self, SettingsError> {
        let raw_base_url = raw_base_url.trim();
        let invalid = |source: url::ParseError| SettingsError::InvalidBaseUrl {
            url: raw_base_url.to_string(),
            source,
        };

        let mut base = Url::parse(raw_base_url).map_err(invalid)?;
        if base.cannot_be_a_base() {
            return Err(SettingsError::NotABase(raw_base_url.to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            analyze: base.join(ANALYZE_PATH).map_err(invalid)?,
            health: base.join(HEALTH_PATH).map_err(invalid)?,
            stats: base.join(STATS_PATH).map_err(invalid)?,
        })
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
