//! Batch coordinator - orchestrator for the process-all operation
//!
//! This module fans processing tasks out over a bounded worker pool, waits
//! for the whole batch, and folds the outcomes into the shared accumulator.

use crate::core::process::accumulator::BatchAccumulator;
use crate::core::process::processor::ItemProcessor;
use crate::domain::errors::ProcessingError;
use crate::domain::item::WorkItem;
use crate::domain::Result;
use crate::store::ItemStore;
use futures::future;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{watch, Semaphore};

/// Batch coordinator
///
/// Runs the process-all operation: one processing task per stored item,
/// bounded by a fixed-size worker pool shared across concurrent batch calls.
pub struct BatchCoordinator {
    store: Arc<dyn ItemStore>,
    processor: Arc<ItemProcessor>,
    accumulator: Arc<BatchAccumulator>,
    workers: Arc<Semaphore>,
    shutdown: watch::Receiver<bool>,
}

impl BatchCoordinator {
    /// Creates a new batch coordinator
    ///
    /// `worker_pool_size` bounds how many processing tasks run concurrently;
    /// the accumulator is injected so its lifetime is tied to service
    /// startup, not to a single batch call.
    pub fn new(
        store: Arc<dyn ItemStore>,
        processor: Arc<ItemProcessor>,
        accumulator: Arc<BatchAccumulator>,
        worker_pool_size: usize,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            store,
            processor,
            accumulator,
            workers: Arc::new(Semaphore::new(worker_pool_size)),
            shutdown,
        }
    }

    /// Process every currently stored item
    ///
    /// This is the main entry point for the batch operation. It:
    /// 1. Takes a point-in-time snapshot of the stored identifiers; items
    ///    added afterwards are excluded from this run.
    /// 2. Submits one processing task per identifier to the worker pool.
    ///    Excess tasks queue on the pool; no item is dropped.
    /// 3. Waits for every task to reach a terminal state.
    /// 4. Folds the outcomes into the accumulator in submission order, not
    ///    completion order.
    /// 5. Returns a snapshot of the full accumulated sequence, including
    ///    items recorded by earlier successful calls.
    ///
    /// A shutdown signal delivered mid-batch aborts the in-flight tasks;
    /// each aborted task surfaces as [`ProcessingError::Interrupted`].
    ///
    /// # Errors
    ///
    /// Fails with the first failure in fold order. Successes folded before
    /// that failure stay in the accumulator; the batch is deliberately not
    /// atomic, and callers must re-list and re-process to learn partial
    /// progress. Items still `NEW` are naturally picked up by the next call.
    pub async fn process_all(&self) -> Result<Vec<WorkItem>> {
        let start_time = Instant::now();

        let ids = self.store.list_ids().await?;
        tracing::info!(count = ids.len(), "Dispatching processing tasks");

        let mut handles = Vec::with_capacity(ids.len());
        for &id in &ids {
            let workers = Arc::clone(&self.workers);
            let processor = Arc::clone(&self.processor);
            handles.push(tokio::spawn(async move {
                let _permit = workers
                    .acquire_owned()
                    .await
                    .map_err(|_| ProcessingError::Interrupted(id))?;
                processor.process_one(id).await
            }));
        }

        // Wait for the whole batch before folding anything; partial results
        // are never surfaced early.
        let abort_handles: Vec<_> = handles.iter().map(|h| h.abort_handle()).collect();
        let wait_all = future::join_all(handles);
        tokio::pin!(wait_all);

        let mut shutdown = self.shutdown.clone();
        let joined = tokio::select! {
            joined = &mut wait_all => joined,
            changed = shutdown.changed() => {
                if changed.is_ok() {
                    tracing::warn!("Shutdown requested, aborting in-flight processing tasks");
                    for handle in &abort_handles {
                        handle.abort();
                    }
                }
                wait_all.await
            }
        };

        // Fold in submission order; completion order is irrelevant here.
        for (id, join_result) in ids.iter().copied().zip(joined) {
            let outcome = join_result.unwrap_or_else(|join_error| {
                tracing::warn!(
                    item_id = %id,
                    error = %join_error,
                    "Processing task did not run to completion"
                );
                Err(ProcessingError::Interrupted(id))
            });

            match outcome {
                Ok(item) => self.accumulator.record(item),
                Err(e) => {
                    tracing::error!(item_id = %id, error = %e, "Batch processing failed");
                    return Err(e.into());
                }
            }
        }

        let snapshot = self.accumulator.snapshot();
        tracing::info!(
            processed = ids.len(),
            accumulated = snapshot.len(),
            duration_ms = start_time.elapsed().as_millis(),
            "Batch processing completed"
        );

        Ok(snapshot)
    }
}
