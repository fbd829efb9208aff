//! Batch processing pipeline
//!
//! This module provides the concurrent batch processing core:
//! - Single-item processing
//! - The process-wide accumulator
//! - Batch coordination over a bounded worker pool

pub mod accumulator;
pub mod coordinator;
pub mod processor;

pub use accumulator::BatchAccumulator;
pub use coordinator::BatchCoordinator;
pub use processor::ItemProcessor;
