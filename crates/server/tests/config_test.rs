//! # Configuration Tests
//!
//! Environment variables are process-global, so every test here runs under
//! `#[serial]` and starts from a cleared environment.

use appraisal_server::config::{get_config, ConfigError};
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

/// Clears every environment variable `get_config` reads.
fn clear_env_vars() {
    for var in [
        "PORT",
        "GEMINI_API_KEY",
        "GEMINI_MODEL",
        "GEMINI_API_URL",
        "MAX_UPLOAD_MB",
        "REQUEST_TIMEOUT_SECS",
        "APPRAISAL_RETRY__MAX_RETRIES",
        "APPRAISAL_RETRY__BASE_DELAY_MS",
        "TEST_APPRAISAL_KEY",
    ] {
        env::remove_var(var);
    }
}

fn write_config(content: &str) -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.yml");
    fs::write(&path, content).expect("Failed to write config file");
    let path = path.to_str().unwrap().to_string();
    (dir, path)
}

#[test]
#[serial]
fn test_get_config_defaults() {
    clear_env_vars();

    let config = get_config(None).expect("Configuration should load with defaults");

    assert_eq!(config.port, 8000);
    assert_eq!(config.gemini_api_key, None);
    assert_eq!(config.gemini_model, "gemini-2.5-flash");
    assert_eq!(config.gemini_api_url, None);
    assert_eq!(config.max_upload_mb, 50);
    assert_eq!(config.max_upload_bytes(), 50 * 1024 * 1024);
    assert_eq!(config.request_timeout_secs, None);
    assert_eq!(config.retry.max_retries, 0);
    assert!(config.gemini_settings().is_none());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env_vars();
    env::set_var("PORT", "9999");
    env::set_var("GEMINI_API_KEY", "env-key");
    env::set_var("GEMINI_MODEL", "gemini-2.5-pro");
    env::set_var("APPRAISAL_RETRY__MAX_RETRIES", "3");

    let config = get_config(None).expect("Configuration should load from env");

    assert_eq!(config.port, 9999);
    assert_eq!(config.gemini_api_key.as_deref(), Some("env-key"));
    assert_eq!(config.gemini_model, "gemini-2.5-pro");
    assert_eq!(config.retry.max_retries, 3);

    let settings = config.gemini_settings().expect("Key is configured");
    assert_eq!(settings.api_key, "env-key");
    assert_eq!(settings.model.as_deref(), Some("gemini-2.5-pro"));

    clear_env_vars();
}

#[test]
#[serial]
fn test_config_file_with_substitution() {
    clear_env_vars();
    env::set_var("TEST_APPRAISAL_KEY", "substituted-key");

    let (_dir, path) = write_config(
        r#"
port: 8123
gemini_api_key: "${TEST_APPRAISAL_KEY}"
gemini_api_url: "http://127.0.0.1:9/generate"
request_timeout_secs: 30
retry:
  max_retries: 2
  base_delay_ms: 100
"#,
    );
    let config = get_config(Some(path.as_str())).expect("Configuration should load from file");

    assert_eq!(config.port, 8123);
    assert_eq!(config.gemini_api_key.as_deref(), Some("substituted-key"));
    assert_eq!(
        config.gemini_api_url.as_deref(),
        Some("http://127.0.0.1:9/generate")
    );
    assert_eq!(config.request_timeout_secs, Some(30));
    assert_eq!(config.retry.max_retries, 2);
    assert_eq!(config.retry.base_delay_ms, 100);

    clear_env_vars();
}

#[test]
#[serial]
fn test_empty_substitution_falls_back_to_none() {
    clear_env_vars();

    let (_dir, path) = write_config(
        r#"
gemini_api_key: "${TEST_APPRAISAL_KEY}"
gemini_api_url: ""
"#,
    );
    let config = get_config(Some(path.as_str())).expect("Configuration should load from file");

    assert_eq!(config.gemini_api_key, None);
    assert_eq!(config.gemini_api_url, None);
}

#[test]
#[serial]
fn test_missing_override_path_is_not_found() {
    clear_env_vars();

    let result = get_config(Some("/nonexistent/appraisal/config.yml"));
    assert!(matches!(result, Err(ConfigError::NotFound(_))));
}
