//! Configuration schema types
//!
//! This module defines the configuration structure for Docket.

use serde::{Deserialize, Serialize};

/// Main Docket configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocketConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Batch processing settings
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DocketConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.processing.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

impl Default for DocketConfig {
    fn default() -> Self {
        Self {
            application: ApplicationConfig::default(),
            processing: ProcessingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_application_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_application_name(),
            log_level: default_log_level(),
        }
    }
}

/// Batch processing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Maximum number of concurrently active processing tasks
    #[serde(default = "default_worker_pool_size")]
    pub worker_pool_size: usize,

    /// Simulated per-item processing cost in milliseconds
    #[serde(default = "default_simulated_latency_ms")]
    pub simulated_latency_ms: u64,
}

impl ProcessingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.worker_pool_size == 0 {
            return Err("worker_pool_size must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            worker_pool_size: default_worker_pool_size(),
            simulated_latency_ms: default_simulated_latency_ms(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for local log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation policy (daily, hourly, size)
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,

    /// Maximum log file size in MB (for size-based rotation)
    #[serde(default = "default_log_max_size_mb")]
    pub local_max_size_mb: u64,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "size"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
            local_max_size_mb: default_log_max_size_mb(),
        }
    }
}

fn default_application_name() -> String {
    "docket".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_worker_pool_size() -> usize {
    10
}

fn default_simulated_latency_ms() -> u64 {
    100
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

fn default_log_max_size_mb() -> u64 {
    100
}
