//! Domain identifier types
//!
//! This module provides the newtype wrapper for work-item identifiers.
//! Identifiers are numeric and assigned by the item store on first save.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Work-item identifier newtype wrapper
///
/// Represents a unique identifier for a work item. Identifiers are assigned
/// sequentially by the item store when an item is first persisted; an item
/// that has never been saved carries no identifier yet.
///
/// # Examples
///
/// ```
/// use docket::domain::ids::ItemId;
/// use std::str::FromStr;
///
/// let id = ItemId::new(42);
/// assert_eq!(id.value(), 42);
/// assert_eq!(ItemId::from_str("42").unwrap(), id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Creates a new ItemId from a raw numeric value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric value of the identifier
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_creation() {
        let id = ItemId::new(7);
        assert_eq!(id.value(), 7);
    }

    #[test]
    fn test_item_id_display() {
        let id = ItemId::new(42);
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn test_item_id_from_str() {
        let id: ItemId = "123".parse().unwrap();
        assert_eq!(id, ItemId::new(123));
    }

    #[test]
    fn test_item_id_from_str_invalid() {
        assert!("not-a-number".parse::<ItemId>().is_err());
        assert!("-1".parse::<ItemId>().is_err());
    }

    #[test]
    fn test_item_id_ordering() {
        assert!(ItemId::new(1) < ItemId::new(2));
    }

    #[test]
    fn test_item_id_serialization() {
        let id = ItemId::new(9);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "9");
        let deserialized: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
