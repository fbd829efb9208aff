//! In-memory item store
//!
//! A thread-safe, process-local implementation of [`ItemStore`] backed by an
//! ordered map. Identifiers are assigned sequentially starting at 1.

use super::traits::ItemStore;
use crate::domain::ids::ItemId;
use crate::domain::item::WorkItem;
use crate::domain::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// In-memory work-item store
///
/// Items are kept in an ordered map, so [`ItemStore::list_ids`] returns
/// identifiers in ascending order. Safe to share behind an `Arc` across
/// concurrent processing tasks.
pub struct MemoryItemStore {
    items: RwLock<BTreeMap<ItemId, WorkItem>>,
    next_id: AtomicU64,
}

impl MemoryItemStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Number of items currently stored
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Whether the store holds no items
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl Default for MemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn get(&self, id: ItemId) -> Result<Option<WorkItem>> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn save(&self, mut item: WorkItem) -> Result<WorkItem> {
        let id = match item.id {
            Some(id) => id,
            None => ItemId::new(self.next_id.fetch_add(1, Ordering::Relaxed)),
        };
        item.id = Some(id);
        self.items.write().await.insert(id, item.clone());
        tracing::trace!(item_id = %id, "Item saved");
        Ok(item)
    }

    async fn delete(&self, id: ItemId) -> Result<bool> {
        let removed = self.items.write().await.remove(&id).is_some();
        tracing::trace!(item_id = %id, removed, "Item delete");
        Ok(removed)
    }

    async fn list_ids(&self) -> Result<Vec<ItemId>> {
        Ok(self.items.read().await.keys().copied().collect())
    }

    async fn find_all(&self) -> Result<Vec<WorkItem>> {
        Ok(self.items.read().await.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::{ItemStatus, WorkItemBuilder};

    fn item(name: &str) -> WorkItem {
        WorkItemBuilder::new()
            .name(name)
            .email("a@b.com")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let store = MemoryItemStore::new();

        let first = store.save(item("first")).await.unwrap();
        let second = store.save(item("second")).await.unwrap();

        assert_eq!(first.id, Some(ItemId::new(1)));
        assert_eq!(second.id, Some(ItemId::new(2)));
    }

    #[tokio::test]
    async fn test_save_with_id_overwrites() {
        let store = MemoryItemStore::new();

        let saved = store.save(item("original")).await.unwrap();
        let id = saved.id.unwrap();

        let mut updated = saved.clone();
        updated.status = ItemStatus::Processed;
        store.save(updated).await.unwrap();

        let fetched = store.get(id).await.unwrap().unwrap();
        assert_eq!(fetched.status, ItemStatus::Processed);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = MemoryItemStore::new();
        assert!(store.get(ItemId::new(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryItemStore::new();
        let saved = store.save(item("doomed")).await.unwrap();
        let id = saved.id.unwrap();

        assert!(store.delete(id).await.unwrap());
        assert!(!store.delete(id).await.unwrap());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_list_ids_ascending() {
        let store = MemoryItemStore::new();
        for name in ["a", "b", "c"] {
            store.save(item(name)).await.unwrap();
        }

        let ids = store.list_ids().await.unwrap();
        assert_eq!(ids, vec![ItemId::new(1), ItemId::new(2), ItemId::new(3)]);
    }

    #[tokio::test]
    async fn test_find_all() {
        let store = MemoryItemStore::new();
        store.save(item("a")).await.unwrap();
        store.save(item("b")).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "a");
        assert_eq!(all[1].name, "b");
    }
}
