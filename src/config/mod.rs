//! Configuration management for Docket.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Docket uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for optional settings
//! - `DOCKET_*` environment variable overrides
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use docket::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("docket.toml")?;
//!
//! println!("Worker pool size: {}", config.processing.worker_pool_size);
//! println!("Simulated latency: {}ms", config.processing.simulated_latency_ms);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! name = "docket"
//! log_level = "info"
//!
//! [processing]
//! worker_pool_size = 10
//! simulated_latency_ms = 100
//!
//! [logging]
//! local_enabled = false
//! local_path = "logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{ApplicationConfig, DocketConfig, LoggingConfig, ProcessingConfig};
