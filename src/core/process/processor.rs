//! Single-item processing
//!
//! This module transforms one work item at a time: simulate the unit of
//! processing cost, fetch the item, flip its status, persist it back.

use crate::domain::errors::ProcessingError;
use crate::domain::ids::ItemId;
use crate::domain::item::{ItemStatus, WorkItem};
use crate::store::ItemStore;
use std::sync::Arc;
use std::time::Duration;

/// Processes one work item at a time
///
/// The processor performs its own fetch rather than taking the item as
/// input, so two concurrent calls for the same identifier both re-fetch and
/// re-write; no per-item mutual exclusion is provided here.
pub struct ItemProcessor {
    store: Arc<dyn ItemStore>,
    simulated_latency: Duration,
}

impl ItemProcessor {
    /// Creates a new item processor
    pub fn new(store: Arc<dyn ItemStore>, simulated_latency: Duration) -> Self {
        Self {
            store,
            simulated_latency,
        }
    }

    /// Process a single item by its identifier
    ///
    /// Waits the configured simulated latency, fetches the item from the
    /// store, marks it [`ItemStatus::Processed`], and persists it, returning
    /// the persisted value. One store write per successful call.
    ///
    /// # Errors
    ///
    /// - [`ProcessingError::NotFound`] if the identifier no longer resolves
    ///   (e.g. the item was deleted concurrently).
    /// - [`ProcessingError::Persistence`] if the store rejects the read or
    ///   the write.
    pub async fn process_one(&self, id: ItemId) -> Result<WorkItem, ProcessingError> {
        tokio::time::sleep(self.simulated_latency).await;

        let mut item = self
            .store
            .get(id)
            .await
            .map_err(|e| ProcessingError::Persistence {
                id,
                cause: e.to_string(),
            })?
            .ok_or(ProcessingError::NotFound(id))?;

        item.status = ItemStatus::Processed;

        let persisted = self
            .store
            .save(item)
            .await
            .map_err(|e| ProcessingError::Persistence {
                id,
                cause: e.to_string(),
            })?;

        tracing::debug!(item_id = %id, "Item processed");
        Ok(persisted)
    }
}
