//! Stacks whose quantity can exceed the native range.
//!
//! The quantity is kept as `overflow * NATIVE_MAX + size`, where `overflow`
//! counts full native-sized layers and `size` is the remainder on top.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use invstack_core::{InventoryError, InventoryResult, ValueObject};

use crate::item::ItemHandle;
use crate::stack::{BoundedStack, LimitedStack, NATIVE_MAX, Stack};

/// Tracks the number of units in a stack with no upper bound.
#[derive(Debug, Clone, Default)]
pub struct UnboundedStack {
    item: ItemHandle,
    overflow: BigUint,
    size: i64,
}

fn native_max() -> BigUint {
    BigUint::from(NATIVE_MAX as u64)
}

impl UnboundedStack {
    /// A stack of `amount` units of `item`.
    ///
    /// A zero `amount` keeps `item`, so the stack can be grown from nothing;
    /// it turns into the empty stack on the next `shrink` or `empty`.
    pub fn new(item: ItemHandle, amount: BigUint) -> Self {
        let layer = native_max();
        let overflow = &amount / &layer;
        // The remainder is below NATIVE_MAX, so it always fits.
        let size = (&amount % &layer).to_i64().unwrap_or(0);
        Self::from_parts(item, overflow, size)
    }

    /// Rebuild a stack from the parts exposed by [`UnboundedStack::parts`].
    ///
    /// `size` is clamped to zero from below. The none item never carries a
    /// quantity.
    pub fn from_parts(item: ItemHandle, overflow: BigUint, size: i64) -> Self {
        if item.is_none() {
            return Self::default();
        }
        Self {
            item,
            overflow,
            size: size.max(0),
        }
    }

    /// `(item, overflow count, remainder)` for external persistence.
    pub fn parts(&self) -> (&ItemHandle, &BigUint, i64) {
        (&self.item, &self.overflow, self.size)
    }

    /// Number of full native-sized layers below the remainder.
    pub fn overflow(&self) -> &BigUint {
        &self.overflow
    }

    /// Remainder on top of the overflow layers.
    pub fn size(&self) -> i64 {
        self.size
    }

    /// The exact quantity held.
    pub fn full_size(&self) -> BigUint {
        &self.overflow * native_max() + BigUint::from(self.size as u64)
    }

    /// Unbounded stacks have no capacity to fill to.
    ///
    /// # Panics
    ///
    /// Always. Use [`UnboundedStack::try_fill`] for a checked form.
    pub fn fill(&mut self) {
        panic!("{}", InventoryError::unsupported("fill on an unbounded stack"));
    }

    /// Unbounded stacks have no notion of remaining space.
    ///
    /// # Panics
    ///
    /// Always. Use [`UnboundedStack::try_size_left`] for a checked form.
    pub fn size_left(&self) -> i64 {
        panic!("{}", InventoryError::unsupported("size_left on an unbounded stack"));
    }

    pub fn try_fill(&mut self) -> InventoryResult<()> {
        Err(InventoryError::unsupported("fill on an unbounded stack"))
    }

    pub fn try_size_left(&self) -> InventoryResult<i64> {
        Err(InventoryError::unsupported("size_left on an unbounded stack"))
    }

    /// Changes the item to none if the stack holds nothing.
    pub(crate) fn normalize(&mut self) {
        if (self.size == 0 && self.overflow.is_zero()) || self.item.is_none() {
            self.item = ItemHandle::none();
            self.overflow = BigUint::zero();
            self.size = 0;
        }
    }
}

impl Stack for UnboundedStack {
    fn item(&self) -> &ItemHandle {
        &self.item
    }

    fn grow(&mut self, amount: i64) {
        if amount < 0 || self.item.is_none() {
            return;
        }

        // At most one carry: both operands are at most NATIVE_MAX.
        let total = self.size as u64 + amount as u64;
        if total > NATIVE_MAX as u64 {
            self.overflow += 1u32;
            self.size = (total - NATIVE_MAX as u64) as i64;
        } else {
            self.size = total as i64;
        }
    }

    fn shrink(&mut self, amount: i64) {
        if amount < 0 {
            return;
        }

        self.size -= amount;

        if self.size < 0 {
            if self.overflow.is_zero() {
                self.size = 0;
            } else {
                self.overflow -= 1u32;
                self.size += NATIVE_MAX;
            }
        }

        self.normalize();
    }

    fn empty(&mut self) {
        self.overflow = BigUint::zero();
        self.size = 0;
        self.normalize();
    }

    fn is_full(&self) -> bool {
        false
    }

    fn is_empty(&self) -> bool {
        self.overflow.is_zero() && self.size == 0
    }
}

impl PartialEq for UnboundedStack {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item && self.full_size() == other.full_size()
    }
}

impl Eq for UnboundedStack {}

impl core::hash::Hash for UnboundedStack {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.item.hash(state);
        self.full_size().hash(state);
    }
}

impl ValueObject for UnboundedStack {}

impl From<BoundedStack> for UnboundedStack {
    fn from(stack: BoundedStack) -> Self {
        // Bounded stacks are already normalized.
        let size = stack.size();
        Self::from_parts(stack.item().clone(), BigUint::zero(), size)
    }
}

impl From<LimitedStack> for UnboundedStack {
    fn from(stack: LimitedStack) -> Self {
        BoundedStack::from(stack).into()
    }
}
