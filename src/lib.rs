// Docket - Work-Item Batch Processing Service
// Copyright (c) 2026 Docket Contributors
// Licensed under the MIT License

//! # Docket - Work-Item Batch Processing Service
//!
//! Docket is a small record-keeping service for named "work items" built
//! around one non-trivial operation: processing every stored item
//! concurrently over a bounded worker pool, transitioning each to
//! `PROCESSED`, and returning the aggregate result.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Managing** work-item records (create, read, update, delete)
//! - **Validating** work-item e-mail fields at the service boundary
//! - **Processing** all stored items concurrently with a fixed-size pool
//! - **Accumulating** processed items in a process-wide, ordered sink
//!
//! ## Architecture
//!
//! Docket follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Batch processing pipeline (processor, accumulator, coordinator)
//! - [`service`] - Service facade wiring store, validation, and processing
//! - [`store`] - Item storage abstraction and in-memory implementation
//! - [`domain`] - Core domain types and models
//! - [`validation`] - Field-format validation collaborators
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docket::config::load_config;
//! use docket::service::ItemService;
//! use docket::store::MemoryItemStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("docket.toml")?;
//!
//!     // Create the service over an in-memory store
//!     let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//!     let store = Arc::new(MemoryItemStore::new());
//!     let service = ItemService::new(store, &config.processing, shutdown_rx)?;
//!
//!     // Process every stored item
//!     let processed = service.process_all().await?;
//!     println!("Accumulated {} processed items", processed.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Batch Semantics
//!
//! The batch operation deliberately fails fast while keeping partial state:
//! if any item's task fails, `process_all` reports the first failure in fold
//! order and returns no result, but items already folded into the
//! accumulator stay there. Callers cannot distinguish "3 of 10 succeeded"
//! from the error alone; re-listing picks up items still in `NEW` status.
//! Re-processing an already-`PROCESSED` set appends duplicate entries — the
//! accumulator is a running tally across calls, not a per-call result.
//!
//! ## Error Handling
//!
//! Docket uses the [`domain::DocketError`] type for all errors:
//!
//! ```rust,no_run
//! use docket::domain::DocketError;
//!
//! fn example() -> Result<(), DocketError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = docket::config::load_config("docket.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Docket uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!("Starting batch processing");
//! warn!(item_id = 42, "Item vanished before processing");
//! error!(error = "store write rejected", "Processing failed");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod service;
pub mod store;
pub mod validation;
