//! Item store abstraction trait
//!
//! This module defines the trait that storage backends must implement
//! to work with Docket.

use crate::domain::ids::ItemId;
use crate::domain::item::WorkItem;
use crate::domain::Result;
use async_trait::async_trait;

/// Storage trait for work items
///
/// This trait defines the interface the service and the batch processing
/// pipeline consume. Implementations must be safe to share across concurrent
/// processing tasks; no cross-item consistency is assumed, and a read-modify-
/// write of one item is not isolated from other readers or writers of the
/// same item.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Fetch a single item by its identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage fails; an absent item is
    /// `Ok(None)`, not an error.
    async fn get(&self, id: ItemId) -> Result<Option<WorkItem>>;

    /// Persist an item, assigning an identifier on first save
    ///
    /// Returns the persisted form of the item. An item saved without an
    /// identifier receives a fresh, unique one; an item saved with an
    /// identifier overwrites any record stored under it.
    ///
    /// # Errors
    ///
    /// Returns an error if the write is rejected by the storage backend.
    async fn save(&self, item: WorkItem) -> Result<WorkItem>;

    /// Delete an item by its identifier
    ///
    /// Returns `true` if an item was removed, `false` if the identifier did
    /// not resolve.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage fails.
    async fn delete(&self, id: ItemId) -> Result<bool>;

    /// List the identifiers of all currently stored items
    ///
    /// The returned order is the listing order of the backend and determines
    /// the submission order of batch processing tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage fails.
    async fn list_ids(&self) -> Result<Vec<ItemId>>;

    /// Fetch all currently stored items
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage fails.
    async fn find_all(&self) -> Result<Vec<WorkItem>>;
}
