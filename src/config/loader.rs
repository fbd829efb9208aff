//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::DocketConfig;
use crate::domain::errors::DocketError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into DocketConfig
/// 4. Applies environment variable overrides (DOCKET_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use docket::config::load_config;
///
/// let config = load_config("docket.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<DocketConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DocketError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        DocketError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: DocketConfig = toml::from_str(&contents)
        .map_err(|e| DocketError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        DocketError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env var pattern is valid");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(DocketError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the DOCKET_* prefix
///
/// Environment variables follow the pattern: DOCKET_<SECTION>_<KEY>
/// For example: DOCKET_PROCESSING_WORKER_POOL_SIZE, DOCKET_APPLICATION_LOG_LEVEL
fn apply_env_overrides(config: &mut DocketConfig) {
    if let Ok(val) = std::env::var("DOCKET_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("DOCKET_PROCESSING_WORKER_POOL_SIZE") {
        if let Ok(size) = val.parse() {
            config.processing.worker_pool_size = size;
        }
    }
    if let Ok(val) = std::env::var("DOCKET_PROCESSING_SIMULATED_LATENCY_MS") {
        if let Ok(latency) = val.parse() {
            config.processing.simulated_latency_ms = latency;
        }
    }

    if let Ok(val) = std::env::var("DOCKET_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("DOCKET_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("DOCKET_TEST_SUBST_VAR", "42");
        let input = "[processing]\nworker_pool_size = ${DOCKET_TEST_SUBST_VAR}\n";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("worker_pool_size = 42"));
        std::env::remove_var("DOCKET_TEST_SUBST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        let input = "value = ${DOCKET_TEST_DEFINITELY_UNSET}\n";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err
            .to_string()
            .contains("DOCKET_TEST_DEFINITELY_UNSET"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let input = "# comment with ${DOCKET_TEST_DEFINITELY_UNSET}\nkey = 1\n";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${DOCKET_TEST_DEFINITELY_UNSET}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config("/definitely/not/there.toml").unwrap_err();
        assert!(matches!(err, DocketError::Configuration(_)));
        assert!(err.to_string().contains("not found"));
    }
}
