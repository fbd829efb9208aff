//! Item storage for Docket.
//!
//! This module provides the storage abstraction for work items:
//!
//! - [`traits`] - Storage abstraction layer (trait-based)
//! - [`memory`] - In-memory implementation
//!
//! # Design Pattern
//!
//! Storage follows the **Adapter Pattern** to isolate the persistence backend
//! and enable testing with instrumented implementations. The service and the
//! batch pipeline only ever see `Arc<dyn ItemStore>`.
//!
//! ```
//! use docket::store::{ItemStore, MemoryItemStore};
//! use docket::domain::item::WorkItemBuilder;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store: Arc<dyn ItemStore> = Arc::new(MemoryItemStore::new());
//!
//! let item = WorkItemBuilder::new()
//!     .name("invoice-2031")
//!     .email("finance@example.com")
//!     .build()?;
//!
//! let saved = store.save(item).await?;
//! assert!(saved.id.is_some());
//! # Ok(())
//! # }
//! ```

pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use memory::MemoryItemStore;
pub use traits::ItemStore;
