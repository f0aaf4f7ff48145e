//! # Configuration Tests
//!
//! Tests for the configuration loading logic: defaults, file values with
//! `${ENV_VAR}` substitution, and environment overrides.

use roadmap_server::config::get_config;
use std::env;
use std::fs::File;
use std::io::Write;
use std::sync::Mutex;

// A mutex to ensure that tests modifying the environment run sequentially.
// Environment variables are a shared, global resource, and running these
// tests in parallel (`cargo test` default) would cause them to interfere.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// A helper function to clear all environment variables used by `get_config`.
fn clear_env_vars() {
    env::remove_var("PORT");
    env::remove_var("GROQ_API_KEY");
    env::remove_var("ROADMAP_PROVIDER__API_URL");
    env::remove_var("ROADMAP_PROVIDER__API_KEY");
    env::remove_var("ROADMAP_PROVIDER__MODEL_NAME");
    env::remove_var("CONFIG_TEST_API_KEY");
}

/// Writes `content` to a temporary config file and returns the guard + path.
fn write_config(content: &str) -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.yml");
    let mut file = File::create(&path).expect("Failed to create config file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config file");
    (dir, path.to_str().unwrap().to_string())
}

#[test]
fn test_get_config_defaults_without_file() {
    let _lock = ENV_LOCK.lock().unwrap();
    clear_env_vars();

    let config =
        get_config(Some("/nonexistent/config.yml")).expect("Configuration should load");

    assert_eq!(config.port, 9090);
    assert_eq!(config.provider.api_key, None);
    assert!(config.provider.api_url.contains("chat/completions"));
    assert!(!config.provider.model_name.is_empty());

    clear_env_vars();
}

#[test]
fn test_get_config_reads_file_values() {
    let _lock = ENV_LOCK.lock().unwrap();
    clear_env_vars();

    let (_dir, path) = write_config(
        r#"
port: 8123
provider:
  api_url: "http://localhost:1234/v1/chat/completions"
  api_key: "file-key"
  model_name: "file-model"
"#,
    );

    let config = get_config(Some(&path)).expect("Configuration should load");

    assert_eq!(config.port, 8123);
    assert_eq!(
        config.provider.api_url,
        "http://localhost:1234/v1/chat/completions"
    );
    assert_eq!(config.provider.api_key, Some("file-key".to_string()));
    assert_eq!(config.provider.model_name, "file-model");

    clear_env_vars();
}

#[test]
fn test_get_config_substitutes_env_vars_in_file() {
    let _lock = ENV_LOCK.lock().unwrap();
    clear_env_vars();
    env::set_var("CONFIG_TEST_API_KEY", "substituted-key");

    let (_dir, path) = write_config(
        r#"
provider:
  api_key: "${CONFIG_TEST_API_KEY}"
"#,
    );

    let config = get_config(Some(&path)).expect("Configuration should load");
    assert_eq!(config.provider.api_key, Some("substituted-key".to_string()));

    clear_env_vars();
}

#[test]
fn test_get_config_treats_unset_substitution_as_unconfigured() {
    let _lock = ENV_LOCK.lock().unwrap();
    clear_env_vars();

    // The variable is unset, so substitution leaves an empty string, which
    // must normalize to "no credential" rather than an empty key.
    let (_dir, path) = write_config(
        r#"
provider:
  api_key: "${CONFIG_TEST_API_KEY}"
"#,
    );

    let config = get_config(Some(&path)).expect("Configuration should load");
    assert_eq!(config.provider.api_key, None);

    clear_env_vars();
}

#[test]
fn test_get_config_groq_api_key_env_fallback() {
    let _lock = ENV_LOCK.lock().unwrap();
    clear_env_vars();
    env::set_var("GROQ_API_KEY", "env-key");

    let config =
        get_config(Some("/nonexistent/config.yml")).expect("Configuration should load");
    assert_eq!(config.provider.api_key, Some("env-key".to_string()));

    clear_env_vars();
}

#[test]
fn test_get_config_port_env_override() {
    let _lock = ENV_LOCK.lock().unwrap();
    clear_env_vars();
    env::set_var("PORT", "4321");

    let config =
        get_config(Some("/nonexistent/config.yml")).expect("Configuration should load");
    assert_eq!(config.port, 4321);

    clear_env_vars();
}
