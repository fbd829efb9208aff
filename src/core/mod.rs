//! Core business logic for Docket.
//!
//! This module contains the batch processing pipeline, the only part of the
//! system with real concurrency coordination and shared mutable state.
//!
//! # Modules
//!
//! - [`process`] - Item processing, accumulation, and batch coordination
//!
//! # Batch Workflow
//!
//! One invocation of the batch operation:
//!
//! 1. **List**: Snapshot the identifiers of all currently stored items
//! 2. **Dispatch**: Submit one processing task per identifier to the pool
//! 3. **Await**: Wait for every task to reach a terminal state
//! 4. **Fold**: Append successes to the accumulator in submission order
//! 5. **Report**: Return the accumulated sequence, or the first failure
//!
//! # Example
//!
//! ```rust,no_run
//! use docket::core::process::{BatchAccumulator, BatchCoordinator, ItemProcessor};
//! use docket::store::{ItemStore, MemoryItemStore};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store: Arc<dyn ItemStore> = Arc::new(MemoryItemStore::new());
//! let processor = Arc::new(ItemProcessor::new(
//!     Arc::clone(&store),
//!     Duration::from_millis(100),
//! ));
//! let accumulator = Arc::new(BatchAccumulator::new());
//! let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//!
//! let coordinator =
//!     BatchCoordinator::new(store, processor, accumulator, 10, shutdown_rx);
//!
//! let processed = coordinator.process_all().await?;
//! println!("Accumulated {} items", processed.len());
//! # Ok(())
//! # }
//! ```

pub mod process;
