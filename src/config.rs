use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Address used when no configuration overrides it
pub const DEFAULT_DATABASE_URL: &str = "mongodb://127.0.0.1:27017/shop";

/// Environment variable overriding the database address
pub const URL_ENV_VAR: &str = "SHOPDB_URL";

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "shopdb.toml";

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error occurred while reading config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error occurred
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Main configuration structure for shopdb
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Database connection configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// MongoDB connection string
    #[serde(default = "default_url")]
    pub url: String,
    /// Application name reported to the server
    #[serde(default)]
    pub app_name: Option<String>,
    /// How long the driver waits for a usable server
    #[serde(default)]
    pub server_selection_timeout_ms: Option<u64>,
    /// TCP connect timeout
    #[serde(default)]
    pub connect_timeout_ms: Option<u64>,
}

fn default_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            app_name: None,
            server_selection_timeout_ms: None,
            connect_timeout_ms: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must exist. Without one, `shopdb.toml` in the working
    /// directory is used when present, otherwise the built-in defaults.
    /// `SHOPDB_URL` overrides the address in every case.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };
        config.database = config.database.with_url_override(url_override());
        Ok(config)
    }
}

impl DatabaseConfig {
    /// Defaults with the `SHOPDB_URL` override applied
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_url_override(url_override())
    }

    /// Replace the address when an override is set and not blank
    #[must_use]
    pub fn with_url_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            debug!("Database URL overridden by {}", URL_ENV_VAR);
            self.url = url;
        }
        self
    }

    /// Server selection timeout as a `Duration`
    #[must_use]
    pub fn server_selection_timeout(&self) -> Option<Duration> {
        self.server_selection_timeout_ms.map(Duration::from_millis)
    }

    /// Connect timeout as a `Duration`
    #[must_use]
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_ms.map(Duration::from_millis)
    }

    /// The address with any password masked, safe for logs
    #[must_use]
    pub fn redacted_url(&self) -> String {
        redact_url(&self.url)
    }
}

/// Non-blank value of `SHOPDB_URL`, if set
#[must_use]
pub fn url_override() -> Option<String> {
    env::var(URL_ENV_VAR).ok().filter(|v| !v.trim().is_empty())
}

/// Mask the password of a connection string.
///
/// Multi-host seed lists are not valid URLs, so those fall back to masking
/// the whole userinfo section.
#[must_use]
pub fn redact_url(raw: &str) -> String {
    if let Ok(mut parsed) = Url::parse(raw) {
        if parsed.password().is_none() || parsed.set_password(Some("***")).is_ok() {
            return parsed.to_string();
        }
    }

    let Some(scheme_end) = raw.find("://") else {
        return raw.to_string();
    };
    let rest = &raw[scheme_end + 3..];
    let authority_end = rest.find('/').unwrap_or(rest.len());
    match rest[..authority_end].rfind('@') {
        Some(at) => format!("{}***@{}", &raw[..scheme_end + 3], &rest[at + 1..]),
        None => raw.to_string(),
    }
}
