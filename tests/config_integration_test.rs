//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables should be run with
//! --test-threads=1 to avoid interference between tests.

use docket::config::load_config;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("DOCKET_APPLICATION_LOG_LEVEL");
    std::env::remove_var("DOCKET_PROCESSING_WORKER_POOL_SIZE");
    std::env::remove_var("DOCKET_PROCESSING_SIMULATED_LATENCY_MS");
    std::env::remove_var("DOCKET_LOGGING_LOCAL_ENABLED");
    std::env::remove_var("TEST_DOCKET_POOL_SIZE");
}

fn write_config(toml_content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[application]
name = "docket"
log_level = "debug"

[processing]
worker_pool_size = 4
simulated_latency_ms = 50

[logging]
local_enabled = true
local_path = "/tmp/docket"
local_rotation = "hourly"
local_max_size_mb = 50
"#;

    let temp_file = write_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.name, "docket");
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.processing.worker_pool_size, 4);
    assert_eq!(config.processing.simulated_latency_ms, 50);
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "/tmp/docket");
    assert_eq!(config.logging.local_rotation, "hourly");
    assert_eq!(config.logging.local_max_size_mb, 50);
}

#[test]
fn test_load_minimal_config_uses_defaults() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config("[application]\nname = \"docket\"\n");
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.processing.worker_pool_size, 10);
    assert_eq!(config.processing.simulated_latency_ms, 100);
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_env_var_overrides() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    std::env::set_var("DOCKET_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var("DOCKET_PROCESSING_WORKER_POOL_SIZE", "2");
    std::env::set_var("DOCKET_PROCESSING_SIMULATED_LATENCY_MS", "5");

    let temp_file = write_config("[processing]\nworker_pool_size = 10\n");
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.processing.worker_pool_size, 2);
    assert_eq!(config.processing.simulated_latency_ms, 5);

    cleanup_env_vars();
}

#[test]
fn test_env_var_substitution() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    std::env::set_var("TEST_DOCKET_POOL_SIZE", "7");

    let temp_file = write_config("[processing]\nworker_pool_size = ${TEST_DOCKET_POOL_SIZE}\n");
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.processing.worker_pool_size, 7);

    cleanup_env_vars();
}

#[test]
fn test_env_var_substitution_missing_variable() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config("[processing]\nworker_pool_size = ${DOCKET_UNSET_TEST_VAR}\n");
    let err = load_config(temp_file.path()).unwrap_err();

    assert!(err.to_string().contains("DOCKET_UNSET_TEST_VAR"));
}

#[test]
fn test_invalid_log_level_rejected() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config("[application]\nlog_level = \"loud\"\n");
    let err = load_config(temp_file.path()).unwrap_err();

    assert!(err.to_string().contains("Invalid log_level"));
}

#[test]
fn test_zero_pool_size_rejected() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config("[processing]\nworker_pool_size = 0\n");
    let err = load_config(temp_file.path()).unwrap_err();

    assert!(err.to_string().contains("worker_pool_size"));
}

#[test]
fn test_malformed_toml_rejected() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config("[processing\nworker_pool_size = 10\n");
    let err = load_config(temp_file.path()).unwrap_err();

    assert!(err.to_string().contains("Failed to parse TOML"));
}

#[test]
fn test_missing_file_rejected() {
    let err = load_config("/definitely/not/there/docket.toml").unwrap_err();
    assert!(err.to_string().contains("not found"));
}
