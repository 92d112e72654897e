//! System configuration: locale, time zone and model database parameters.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default configuration file name, relative to the working directory.
pub const CONFIG_FILE: &str = "configuration.json";

/// Settings shared by reciprocal system applications.
///
/// Every field has a default, so a configuration file only needs the keys
/// that differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RsConfig {
    /// ISO 639 language code.
    pub language: String,
    /// ISO 3166 region code.
    pub region: String,
    /// IANA time zone name.
    pub timezone: String,

    /// Database host. Without one the local socket is used.
    pub host: Option<String>,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl Default for RsConfig {
    fn default() -> Self {
        Self {
            language: "en".into(),
            region: "US".into(),
            timezone: "UTC".into(),
            host: None,
            port: 5432,
            database: "rsrs".into(),
            user: "username".into(),
            password: "password".into(),
        }
    }
}

impl RsConfig {
    /// Parse a JSON configuration. Missing keys take their defaults.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        tracing::info!(
            "Loaded configuration from {} (locale {}, timezone {})",
            path.display(),
            config.locale(),
            config.timezone
        );
        if config.host.is_none() {
            tracing::debug!("no database host configured, using local connection");
        }
        Ok(config)
    }

    /// BCP 47 style locale tag, e.g. `en-US`.
    pub fn locale(&self) -> String {
        format!("{}-{}", self.language, self.region)
    }

    /// PostgreSQL connection URI for the model database.
    ///
    /// Only builds the string; no connection is opened here.
    pub fn connection_uri(&self) -> String {
        match &self.host {
            Some(host) => format!("postgresql://{}:{}/{}", host, self.port, self.database),
            None => format!("postgresql:{}", self.database),
        }
    }
}
