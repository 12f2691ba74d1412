//! Application configuration.
//!
//! Configuration is loaded from a TOML file at:
//! 1. `$EMAIL_TRIAGE_CONFIG` (environment variable)
//! 2. `~/.config/email-triage/config.toml` (Linux)
//!    `~/Library/Application Support/email-triage/config.toml` (macOS)
//!    `%APPDATA%\email-triage\config.toml` (Windows)
//! 3. Built-in defaults

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::recipients::{DEFAULT_RECIPIENTS, RecipientSet};

/// Environment variable naming an alternate config file
pub const CONFIG_ENV: &str = "EMAIL_TRIAGE_CONFIG";

/// Environment variables consulted for the API key, in order
pub const API_KEY_ENVS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Addresses the classifier may route to.
    pub recipients: Vec<String>,
    pub general: GeneralConfig,
    pub backend: BackendConfig,
    pub history: HistoryConfig,
}

/// General behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub log_level: String,
}

/// Generative backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Model identifier sent with every request.
    pub model: String,
    /// API base URL.
    pub endpoint: String,
    /// API key; environment variables are used when unset.
    pub api_key: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// History persistence settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Override for the history file location.
    pub path: Option<PathBuf>,
}

// ── Default implementations ─────────────────────────────────────

impl Default for Config {
    fn default() -> Self {
        Self {
            recipients: DEFAULT_RECIPIENTS.iter().map(ToString::to_string).collect(),
            general: GeneralConfig::default(),
            backend: BackendConfig::default(),
            history: HistoryConfig::default(),
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout_secs: 60,
        }
    }
}

impl BackendConfig {
    /// Configured key, else the first non-empty key environment variable.
    #[must_use]
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                API_KEY_ENVS
                    .iter()
                    .filter_map(|name| std::env::var(name).ok())
                    .find(|k| !k.trim().is_empty())
            })
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// The recipient set this configuration describes.
    #[must_use]
    pub fn recipient_set(&self) -> RecipientSet {
        RecipientSet::new(self.recipients.iter().cloned())
    }
}

// ── Load ────────────────────────────────────────────────────────

/// Load configuration, searching standard locations.
///
/// Returns the default configuration if no file is found or on parse error.
pub fn load_config() -> Config {
    match read_config() {
        Ok(Some((path, cfg))) => {
            tracing::info!(path = %path.display(), "Loaded config");
            cfg
        }
        Ok(None) => Config::default(),
        Err(e) => {
            tracing::warn!(error = %e, "Using default config");
            Config::default()
        }
    }
}

/// Read the config file from the standard location, if there is one.
///
/// Does not log, so it can run before a subscriber is installed.
pub fn read_config() -> Result<Option<(PathBuf, Config)>, ConfigError> {
    match config_file_path() {
        Some(path) if path.exists() => read_config_from(&path).map(|cfg| Some((path, cfg))),
        _ => Ok(None),
    }
}

/// Read and parse one config file.
pub fn read_config_from(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Determine the config file path (checking env var first, then standard dirs).
#[must_use]
pub fn config_file_path() -> Option<PathBuf> {
    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return Some(PathBuf::from(env_path));
    }
    dirs::config_dir().map(|d| d.join("email-triage").join("config.toml"))
}

/// Return the history file path.
#[must_use]
pub fn history_file_path(config: &Config) -> PathBuf {
    if let Some(ref path) = config.history.path {
        return path.clone();
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("email-triage")
        .join("history.json")
}
