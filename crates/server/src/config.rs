//! # Application Configuration
//!
//! This module defines the configuration structure for the `roadmap-server`
//! and provides the logic for loading it from an optional `config.yml` file
//! and environment variables. A missing upstream credential is a legitimate
//! configuration state (the server then serves fallback roadmaps only), so
//! nothing here treats it as an error.

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fs;
use tracing::info;

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate or file I/O.
    General(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
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
    /// Settings for the upstream completion API.
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Provides a default value for the `port` field if not set in the environment.
fn default_port() -> u16 {
    9090
}

/// Configuration for the upstream chat-completion provider.
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// The chat-completion endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// The bearer credential. `None` means fallback-only mode.
    #[serde(default)]
    pub api_key: Option<String>,
    /// The model identifier sent with every request.
    #[serde(default = "default_model_name")]
    pub model_name: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            model_name: default_model_name(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.groq.com/openai/v1/chat/completions".to_string()
}

fn default_model_name() -> String {
    "llama-3.3-70b-versatile".to_string()
}

// Helper to read a file, substitute env vars, and return its content.
// Returns Ok(None) if the file does not exist, or an error if it fails to read.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !std::path::Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}").unwrap();
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_else(|_| "".to_string())
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the application configuration from a file and environment variables.
///
/// Layering, lowest to highest precedence:
/// 1. Hardcoded defaults (port 9090, Groq endpoint, no credential).
/// 2. An optional `config.yml` next to the crate manifest, with `${ENV_VAR}`
///    substitution applied to its content.
/// 3. Top-level environment variables such as `PORT`.
/// 4. Prefixed environment variables for nested keys, e.g.
///    `ROADMAP_PROVIDER__API_KEY` or `ROADMAP_PROVIDER__MODEL_NAME`.
///
/// As a convenience, `GROQ_API_KEY` fills in the credential when no other
/// layer provided one.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let main_config_path = if let Some(override_path) = config_path_override {
        override_path.to_string()
    } else {
        let base_path = env!("CARGO_MANIFEST_DIR");
        format!("{base_path}/config.yml")
    };

    let mut builder = ConfigBuilder::builder();

    if let Some(content) = read_and_substitute(&main_config_path)? {
        info!("Loading configuration from '{main_config_path}'.");
        builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
    }

    let settings = builder
        .add_source(Environment::default())
        .add_source(
            Environment::with_prefix("ROADMAP")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    // The `${GROQ_API_KEY}` substitution leaves an empty string behind when
    // the variable is unset. Normalize that to "unconfigured".
    if config
        .provider
        .api_key
        .as_deref()
        .is_some_and(|k| k.is_empty())
    {
        config.provider.api_key = None;
    }
    if config.provider.api_key.is_none() {
        if let Ok(key) = env::var("GROQ_API_KEY") {
            if !key.is_empty() {
                config.provider.api_key = Some(key);
            }
        }
    }

    Ok(config)
}
