//! Work-item domain model
//!
//! This module defines the core WorkItem type and its processing status.

use super::ids::ItemId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Processing status of a work item
///
/// A work item starts out as [`ItemStatus::New`] and is moved to
/// [`ItemStatus::Processed`] by the batch processing pipeline. No other
/// status value is ever assigned.
///
/// Serialized as `"NEW"` / `"PROCESSED"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    /// Freshly created, not yet processed
    #[default]
    New,
    /// Processed by a batch run and persisted back to the store
    Processed,
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemStatus::New => write!(f, "NEW"),
            ItemStatus::Processed => write!(f, "PROCESSED"),
        }
    }
}

/// Represents a single work item record
///
/// A work item is the unit of record managed by the service: a named piece of
/// work with a contact e-mail and a processing status. The identifier is
/// assigned by the item store on first save and is `None` until then. The
/// e-mail field is an opaque string here; syntactic validation is owned by
/// [`crate::validation::EmailValidator`].
///
/// # Examples
///
/// ```
/// use docket::domain::item::{ItemStatus, WorkItemBuilder};
///
/// let item = WorkItemBuilder::new()
///     .name("invoice-2031")
///     .description("Reconcile invoice 2031")
///     .email("finance@example.com")
///     .build()
///     .unwrap();
///
/// assert!(item.id.is_none());
/// assert_eq!(item.status, ItemStatus::New);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Store-assigned identifier; `None` until the item is first persisted
    #[serde(default)]
    pub id: Option<ItemId>,

    /// Human-readable name of the work item
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Current processing status
    #[serde(default)]
    pub status: ItemStatus,

    /// Contact e-mail attached to the item (validated externally)
    pub email: String,
}

impl WorkItem {
    /// Creates a new builder for constructing a WorkItem
    pub fn builder() -> WorkItemBuilder {
        WorkItemBuilder::default()
    }
}

/// Builder for constructing WorkItem instances
#[derive(Debug, Default)]
pub struct WorkItemBuilder {
    id: Option<ItemId>,
    name: Option<String>,
    description: Option<String>,
    status: Option<ItemStatus>,
    email: Option<String>,
}

impl WorkItemBuilder {
    /// Creates a new WorkItemBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identifier (normally left unset; the store assigns one)
    pub fn id(mut self, id: ItemId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the item name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the processing status
    pub fn status(mut self, status: ItemStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the contact e-mail
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Builds the WorkItem
    ///
    /// # Errors
    ///
    /// Returns an error if `name` or `email` is missing.
    pub fn build(self) -> Result<WorkItem, String> {
        Ok(WorkItem {
            id: self.id,
            name: self.name.ok_or("name is required")?,
            description: self.description.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            email: self.email.ok_or("email is required")?,
        })
    }
}
