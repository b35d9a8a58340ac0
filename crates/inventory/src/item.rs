//! Item capability, the none item and shared item handles.

use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use invstack_core::{InventoryError, InventoryResult, ItemId, NONE_ITEM_ID, ValueObject};

/// Any type implementing [`Item`] can be tracked by stacks and containers.
///
/// Item catalogs live outside this crate; they only need to hand out values
/// implementing this capability.
pub trait Item: core::fmt::Debug + Send + Sync {
    /// Stable unique identifier. [`NONE_ITEM_ID`] is reserved.
    fn id(&self) -> &str;

    /// The maximum number of units that fit in a single limited stack.
    fn max_stack_size(&self) -> StackLimit {
        StackLimit::Unbounded
    }
}

/// Declared maximum stack size of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackLimit {
    Finite(i64),
    Unbounded,
}

impl StackLimit {
    /// The largest size a limited stack of this item may hold.
    ///
    /// Unbounded items are still capped by the native quantity range.
    pub fn cap(self) -> i64 {
        match self {
            StackLimit::Finite(max) => max.max(0),
            StackLimit::Unbounded => i64::MAX,
        }
    }
}

/// Represents "no" item. Its id is reserved and its max stack size is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoItem;

impl Item for NoItem {
    fn id(&self) -> &str {
        NONE_ITEM_ID
    }

    fn max_stack_size(&self) -> StackLimit {
        StackLimit::Finite(0)
    }
}

static NONE: LazyLock<ItemHandle> = LazyLock::new(|| ItemHandle(Arc::new(NoItem)));

/// Shared reference to an item definition.
///
/// Cheap to clone. Two handles are equal when their ids are equal, whichever
/// concrete type sits behind them.
#[derive(Clone)]
pub struct ItemHandle(Arc<dyn Item>);

impl ItemHandle {
    /// Wrap a catalog item, checking it honours the capability contract.
    pub fn new<I: Item + 'static>(item: I) -> InventoryResult<Self> {
        ItemId::validate(item.id())?;
        if let StackLimit::Finite(max) = item.max_stack_size() {
            if max < 0 {
                return Err(InventoryError::validation(format!(
                    "max stack size of {} cannot be negative (got {max})",
                    item.id()
                )));
            }
        }
        Ok(Self(Arc::new(item)))
    }

    /// The process-wide none item.
    pub fn none() -> Self {
        NONE.clone()
    }

    pub fn is_none(&self) -> bool {
        self.id() == NONE_ITEM_ID
    }

    pub fn id(&self) -> &str {
        self.0.id()
    }

    pub fn max_stack_size(&self) -> StackLimit {
        self.0.max_stack_size()
    }
}

impl Default for ItemHandle {
    fn default() -> Self {
        Self::none()
    }
}

impl PartialEq for ItemHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for ItemHandle {}

impl core::hash::Hash for ItemHandle {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl core::fmt::Debug for ItemHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_none() {
            f.write_str("None")
        } else {
            f.debug_tuple("Item").field(&self.id()).finish()
        }
    }
}

impl core::fmt::Display for ItemHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_none() {
            f.write_str("None")
        } else {
            f.write_str(self.id())
        }
    }
}

/// Plain item definition, e.g. loaded from a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: ItemId,
    pub max_stack: StackLimit,
}

impl ItemDef {
    pub fn new(id: ItemId, max_stack: StackLimit) -> Self {
        Self { id, max_stack }
    }

    /// Convenience for items stacking up to `max` units.
    pub fn limited(id: &str, max: i64) -> InventoryResult<Self> {
        if max < 0 {
            return Err(InventoryError::validation("max stack size cannot be negative"));
        }
        Ok(Self::new(id.parse()?, StackLimit::Finite(max)))
    }

    /// Convenience for items with no declared maximum.
    pub fn unbounded(id: &str) -> InventoryResult<Self> {
        Ok(Self::new(id.parse()?, StackLimit::Unbounded))
    }

    pub fn into_handle(self) -> InventoryResult<ItemHandle> {
        ItemHandle::new(self)
    }
}

impl Item for ItemDef {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn max_stack_size(&self) -> StackLimit {
        self.max_stack
    }
}

impl ValueObject for ItemDef {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Pebble;

    impl Item for Pebble {
        fn id(&self) -> &str {
            "pebble"
        }
    }

    #[derive(Debug)]
    struct Impostor;

    impl Item for Impostor {
        fn id(&self) -> &str {
            NONE_ITEM_ID
        }
    }

    #[test]
    fn none_item_uses_reserved_id() {
        assert_eq!(NoItem.id(), NONE_ITEM_ID);
        assert_eq!(ItemHandle::none().id(), NONE_ITEM_ID);
    }

    #[test]
    fn none_item_max_stack_size_is_zero() {
        assert_eq!(NoItem.max_stack_size(), StackLimit::Finite(0));
        assert_eq!(ItemHandle::none().max_stack_size().cap(), 0);
    }

    #[test]
    fn items_default_to_unbounded() {
        let pebble = ItemHandle::new(Pebble).unwrap();
        assert_eq!(pebble.max_stack_size(), StackLimit::Unbounded);
        assert_eq!(pebble.max_stack_size().cap(), i64::MAX);
    }

    #[test]
    fn handles_compare_by_id() {
        let a = ItemDef::limited("pebble", 10).unwrap().into_handle().unwrap();
        let b = ItemHandle::new(Pebble).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, ItemHandle::none());
    }

    #[test]
    fn rejects_items_claiming_the_reserved_id() {
        let err = ItemHandle::new(Impostor).unwrap_err();
        assert_eq!(err, InventoryError::reserved_id(NONE_ITEM_ID));
    }

    #[test]
    fn rejects_negative_max_stack_size() {
        let def = ItemDef::new("sand".parse().unwrap(), StackLimit::Finite(-3));
        match ItemHandle::new(def).unwrap_err() {
            InventoryError::Validation(_) => {}
            _ => panic!("Expected Validation error for negative max stack size"),
        }
        assert!(ItemDef::limited("sand", -1).is_err());
    }

    #[test]
    fn item_def_round_trips_through_json() {
        let def = ItemDef::limited("torch", 64).unwrap();
        let json = serde_json::to_string(&def).unwrap();
        assert_eq!(json, r#"{"id":"torch","max_stack":{"finite":64}}"#);

        let back: ItemDef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, def);

        let unbounded: ItemDef =
            serde_json::from_str(r#"{"id":"water","max_stack":"unbounded"}"#).unwrap();
        assert_eq!(unbounded.max_stack, StackLimit::Unbounded);
    }
}
