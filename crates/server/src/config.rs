//! # Application Configuration
//!
//! This module defines the configuration structure for the `appraisal-server`
//! and the logic for loading it from an optional `config.yml` file and
//! environment variables.

use appraisal::providers::{
    ai::retry::RetryPolicy,
    factory::{GeminiSettings, DEFAULT_GEMINI_MODEL},
};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fs;
use std::time::Duration;
use tracing::info;

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates an explicitly requested configuration file was not found.
    NotFound(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The Gemini API key. Loaded from `GEMINI_API_KEY` env var.
    #[serde(default)]
    pub gemini_api_key: Option<String>,
    /// The Gemini model name. Loaded from `GEMINI_MODEL` env var.
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    /// A full `generateContent` URL, overriding the one derived from the model.
    #[serde(default)]
    pub gemini_api_url: Option<String>,
    /// Largest accepted upload, in megabytes.
    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: usize,
    /// Per-call timeout for the model, in seconds. No timeout when unset.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Retries for transient model failures. Disabled by default.
    #[serde(default)]
    pub retry: RetryPolicy,
}

fn default_port() -> u16 {
    8000
}

fn default_gemini_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_max_upload_mb() -> usize {
    50
}

impl AppConfig {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }

    /// Provider settings derived from this configuration.
    pub fn gemini_settings(&self) -> Option<GeminiSettings> {
        let api_key = self.gemini_api_key.clone()?;
        Some(GeminiSettings {
            api_key,
            model: Some(self.gemini_model.clone()),
            api_url: self.gemini_api_url.clone(),
            timeout: self.request_timeout_secs.map(Duration::from_secs),
            retry: self.retry,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// Helper to read a file, substitute env vars, and return its content.
// Returns Ok(None) if the file does not exist, or an error if it fails to read.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !std::path::Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(format!("Invalid substitution pattern: {e}")))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the application configuration from a file and environment variables.
///
/// - An explicit `config_path_override` must exist; otherwise `config.yml`
///   next to this crate is used when present.
/// - Top-level keys like `port` and `gemini_api_key` are overridden by `PORT`
///   and `GEMINI_API_KEY`.
/// - Nested keys are overridden by `APPRAISAL_...` variables (e.g.
///   `APPRAISAL_RETRY__MAX_RETRIES`).
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let base_path = env!("CARGO_MANIFEST_DIR");
    let mut builder = ConfigBuilder::builder();

    let file_content = match config_path_override {
        Some(path) => Some(read_and_substitute(path)?.ok_or_else(|| {
            ConfigError::NotFound(format!("Config file not found at '{path}'."))
        })?),
        None => {
            let default_path = format!("{base_path}/config.yml");
            let content = read_and_substitute(&default_path)?;
            if content.is_some() {
                info!("Loading configuration from '{default_path}'.");
            }
            content
        }
    };
    if let Some(content) = file_content {
        builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
    }

    let settings = builder
        // Plain environment variables for top-level keys like PORT.
        .add_source(Environment::default())
        // Prefixed environment variables for nested overrides.
        .add_source(
            Environment::with_prefix("APPRAISAL")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    // An unset `${GEMINI_API_KEY}` substitutes to an empty string; fall back to the
    // process environment in that case.
    config.gemini_api_key = non_empty(config.gemini_api_key)
        .or_else(|| non_empty(env::var("GEMINI_API_KEY").ok()));
    config.gemini_api_url = non_empty(config.gemini_api_url);

    Ok(config)
}
