//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Docket using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Docket - Work-Item Batch Processing Service
#[derive(Parser, Debug)]
#[command(name = "docket")]
#[command(version, about, long_about = None)]
#[command(author = "Docket Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "docket.toml", env = "DOCKET_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DOCKET_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Seed work items and run the batch processing operation
    Process(commands::process::ProcessArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
