//! Work-item service facade.
//!
//! [`ItemService`] wires the store, the e-mail validator, and the batch
//! pipeline together and exposes the record-keeping operations alongside
//! the batch processing entry point. A request-handling layer (HTTP or
//! otherwise) is out of scope for this crate; this API is the outer surface.

use crate::config::ProcessingConfig;
use crate::core::process::{BatchAccumulator, BatchCoordinator, ItemProcessor};
use crate::domain::ids::ItemId;
use crate::domain::item::WorkItem;
use crate::domain::Result;
use crate::store::ItemStore;
use crate::validation::EmailValidator;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Work-item record service
///
/// Owns the process-wide [`BatchAccumulator`]: the accumulated sequence of
/// processed items survives across [`ItemService::process_all`] calls for
/// the lifetime of the service and is never reset.
pub struct ItemService {
    store: Arc<dyn ItemStore>,
    validator: EmailValidator,
    accumulator: Arc<BatchAccumulator>,
    coordinator: BatchCoordinator,
}

impl ItemService {
    /// Creates a new service over the given store
    ///
    /// The shutdown receiver is forwarded to the batch coordinator; a signal
    /// delivered mid-batch aborts the in-flight processing tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if the e-mail validator fails to build.
    pub fn new(
        store: Arc<dyn ItemStore>,
        config: &ProcessingConfig,
        shutdown: watch::Receiver<bool>,
    ) -> Result<Self> {
        let validator = EmailValidator::new()?;
        let accumulator = Arc::new(BatchAccumulator::new());
        let processor = Arc::new(ItemProcessor::new(
            Arc::clone(&store),
            Duration::from_millis(config.simulated_latency_ms),
        ));
        let coordinator = BatchCoordinator::new(
            Arc::clone(&store),
            processor,
            Arc::clone(&accumulator),
            config.worker_pool_size,
            shutdown,
        );

        Ok(Self {
            store,
            validator,
            accumulator,
            coordinator,
        })
    }

    /// List all stored items
    pub async fn find_all(&self) -> Result<Vec<WorkItem>> {
        self.store.find_all().await
    }

    /// Fetch a single item, `None` if the identifier does not resolve
    pub async fn find_by_id(&self, id: ItemId) -> Result<Option<WorkItem>> {
        self.store.get(id).await
    }

    /// Create a new item
    ///
    /// The e-mail is validated before the write; the identifier is assigned
    /// by the store, any caller-supplied identifier is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::DocketError::Validation`] if the e-mail does
    /// not satisfy the format contract.
    pub async fn create(&self, item: WorkItem) -> Result<WorkItem> {
        self.validator.validate(&item.email)?;
        let item = WorkItem { id: None, ..item };
        let created = self.store.save(item).await?;
        tracing::info!(item_id = ?created.id, name = %created.name, "Item created");
        Ok(created)
    }

    /// Update an existing item
    ///
    /// Returns `None` without writing if the identifier does not resolve;
    /// updates never create records.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::DocketError::Validation`] if the e-mail does
    /// not satisfy the format contract.
    pub async fn update(&self, id: ItemId, item: WorkItem) -> Result<Option<WorkItem>> {
        self.validator.validate(&item.email)?;
        if self.store.get(id).await?.is_none() {
            return Ok(None);
        }
        let item = WorkItem {
            id: Some(id),
            ..item
        };
        let updated = self.store.save(item).await?;
        tracing::info!(item_id = %id, "Item updated");
        Ok(Some(updated))
    }

    /// Delete an item, reporting whether anything was removed
    pub async fn delete_by_id(&self, id: ItemId) -> Result<bool> {
        let removed = self.store.delete(id).await?;
        if removed {
            tracing::info!(item_id = %id, "Item deleted");
        }
        Ok(removed)
    }

    /// Process every currently stored item
    ///
    /// Delegates to the batch coordinator; see
    /// [`BatchCoordinator::process_all`] for the full semantics, including
    /// the deliberate fail-fast-but-keep-partial-state failure policy.
    pub async fn process_all(&self) -> Result<Vec<WorkItem>> {
        self.coordinator.process_all().await
    }

    /// Running count of items processed since service startup
    pub fn processed_count(&self) -> u64 {
        self.accumulator.count()
    }
}
