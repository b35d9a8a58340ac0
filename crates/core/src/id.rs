//! Strongly-typed item identifiers.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Id reserved for the none item. Real items must never use it.
pub const NONE_ITEM_ID: &str = "\\empty\\";

/// Identifier of an item definition.
///
/// Always non-empty and never equal to [`NONE_ITEM_ID`]; both are checked on
/// parse and on deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Result<Self, InventoryError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks a raw id against the rules every item id must follow.
    pub fn validate(id: &str) -> Result<(), InventoryError> {
        if id.trim().is_empty() {
            return Err(InventoryError::validation("item id cannot be empty"));
        }
        if id == NONE_ITEM_ID {
            return Err(InventoryError::reserved_id(id));
        }
        Ok(())
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemId {
    type Error = InventoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemId> for String {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

impl FromStr for ItemId {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
