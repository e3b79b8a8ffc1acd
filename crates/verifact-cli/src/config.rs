//! Configuration management for the CLI.
//!
//! Settings come from an optional `~/.verifact/config.toml`; credentials come
//! from the environment and are required. A missing credential is a fatal
//! startup error raised before any workflow invocation.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the Tavily API key.
pub const TAVILY_API_KEY_VAR: &str = "TAVILY_API_KEY";

/// Environment variable holding the Google API key.
pub const GOOGLE_API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// File-backed settings
    pub settings: Settings,

    /// Environment-backed provider credentials
    pub credentials: Credentials,
}

/// Settings persisted in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Completion model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum search results requested per claim
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Per-stage provider timeout in seconds
    #[serde(default = "default_stage_timeout")]
    pub stage_timeout_secs: u64,

    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,
}

/// Required provider credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Tavily search API key
    pub tavily_api_key: String,

    /// Google Generative Language API key
    pub google_api_key: String,
}

impl Config {
    /// Default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".verifact").join("config.toml"))
    }

    /// Load settings from `path` (or the default location) and credentials
    /// from the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(p) => Settings::from_file(p)?,
            None => {
                let p = Self::default_path()?;
                if p.exists() {
                    Settings::from_file(&p)?
                } else {
                    Settings::default()
                }
            }
        };

        Ok(Self {
            settings,
            credentials: Credentials::from_env()?,
        })
    }
}

impl Settings {
    /// Read settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_results: default_max_results(),
            stage_timeout_secs: default_stage_timeout(),
            color: true,
        }
    }
}

impl Credentials {
    /// Read both provider keys from the environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            tavily_api_key: require_env(TAVILY_API_KEY_VAR)?,
            google_api_key: require_env(GOOGLE_API_KEY_VAR)?,
        })
    }
}

fn require_env(var: &str) -> Result<String> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(CliError::Config(format!(
            "Required environment variable {} is not set",
            var
        ))),
    }
}

fn default_model() -> String {
    verifact_providers::gemini::DEFAULT_MODEL.to_string()
}

fn default_max_results() -> usize {
    verifact_domain::MAX_SOURCES
}

fn default_stage_timeout() -> u64 {
    60
}

fn default_true() -> bool {
    true
}
