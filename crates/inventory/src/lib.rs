//! Inventory quantity module.
//!
//! Tracks how many units of an item sit in a stack, and how a fixed row of
//! slots is filled, counted and drained. Quantities beyond the native range
//! are carried by [`UnboundedStack`]. Pure value logic only: no IO, no
//! persistence, no locking.

pub mod config;
pub mod container;
pub mod item;
pub mod stack;
pub mod unbounded;

pub use config::ContainerConfig;
pub use container::{Container, CountResult, LimitedContainer, SlotContainer};
pub use item::{Item, ItemDef, ItemHandle, NoItem, StackLimit};
pub use stack::{BoundedStack, LimitedStack, NATIVE_MAX, SlotStack, Stack};
pub use unbounded::UnboundedStack;

pub use invstack_core::{InventoryError, InventoryResult, ItemId, NONE_ITEM_ID};
