//! Inventory error model.

use thiserror::Error;

/// Result type used across the inventory crates.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Quantity arithmetic never fails (it saturates or reports overflow through
/// a flag), so this only covers failures at the item boundary and checked
/// calls of operations a stack kind does not support.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A value failed validation (e.g. malformed item id, negative limit).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An item tried to use the id reserved for the none item.
    #[error("reserved item id: {0}")]
    ReservedId(String),

    /// The operation has no meaning for this kind of stack.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

impl InventoryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn reserved_id(id: impl Into<String>) -> Self {
        Self::ReservedId(id.into())
    }

    pub fn unsupported(operation: &'static str) -> Self {
        Self::Unsupported(operation)
    }
}
