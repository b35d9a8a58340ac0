//! `invstack-core` — foundation building blocks shared by the inventory crates.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{InventoryError, InventoryResult};
pub use id::{ItemId, NONE_ITEM_ID};
pub use value_object::ValueObject;
