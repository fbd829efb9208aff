//! Domain models and types for Docket.
//!
//! This module contains the core domain models, types, and business rules for
//! the work-item service.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`ItemId`])
//! - **Domain models** ([`WorkItem`], [`ItemStatus`])
//! - **Error types** ([`DocketError`], [`ProcessingError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Identifiers use the newtype pattern so raw integers cannot be passed where
//! an item identifier is expected:
//!
//! ```
//! use docket::domain::ItemId;
//!
//! let id = ItemId::new(42);
//! assert_eq!(id.to_string(), "42");
//! ```
//!
//! # Builder Pattern
//!
//! Work items are constructed through a builder:
//!
//! ```
//! use docket::domain::item::WorkItemBuilder;
//!
//! let item = WorkItemBuilder::new()
//!     .name("invoice-2031")
//!     .email("finance@example.com")
//!     .build()
//!     .unwrap();
//! ```

pub mod errors;
pub mod ids;
pub mod item;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{DocketError, ProcessingError};
pub use ids::ItemId;
pub use item::{ItemStatus, WorkItem, WorkItemBuilder};
pub use result::Result;
