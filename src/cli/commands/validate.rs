//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Docket configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates on success, so a loaded config is a valid one
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Application: {}", config.application.name);
        println!("  Log Level: {}", config.application.log_level);
        println!(
            "  Worker Pool Size: {}",
            config.processing.worker_pool_size
        );
        println!(
            "  Simulated Latency: {}ms",
            config.processing.simulated_latency_ms
        );
        println!("  File Logging: {}", config.logging.local_enabled);
        if config.logging.local_enabled {
            println!("  Log Path: {}", config.logging.local_path);
            println!("  Log Rotation: {}", config.logging.local_rotation);
        }
        println!();
        Ok(0)
    }
}
