//! Bounded and limited stacks.
//!
//! Both hold at most [`NATIVE_MAX`] units. A limited stack additionally
//! clamps to its item's declared maximum stack size whenever it grows or
//! shrinks.

use invstack_core::ValueObject;

use crate::item::{ItemHandle, StackLimit};

/// Largest quantity a single bounded slot can hold.
pub const NATIVE_MAX: i64 = i64::MAX;

/// Operations shared by every stack kind.
pub trait Stack: ValueObject {
    /// The item held, or the none item when empty.
    fn item(&self) -> &ItemHandle;

    /// Increases the quantity by `amount`. Negative amounts are ignored.
    fn grow(&mut self, amount: i64);

    /// Decreases the quantity by `amount`, never below zero. Negative amounts
    /// are ignored.
    fn shrink(&mut self, amount: i64);

    /// Drops the whole quantity; the stack becomes the empty stack.
    fn empty(&mut self);

    fn is_full(&self) -> bool;

    fn is_empty(&self) -> bool;

    /// Independent value copy.
    fn copy(&self) -> Self {
        self.clone()
    }
}

/// A stack kind whose quantity fits the native range, and so can occupy a
/// container slot.
pub trait SlotStack: Stack {
    /// Build a stack of `size` units of `item` (normalized, never clamped).
    fn create(item: ItemHandle, size: i64) -> Self;

    /// The canonical empty stack.
    fn empty_stack() -> Self {
        Self::create(ItemHandle::none(), 0)
    }

    fn size(&self) -> i64;

    /// Grows the stack to its capacity.
    fn fill(&mut self);

    /// How much more this stack can hold.
    fn size_left(&self) -> i64;

    /// How many units of `item` a fresh stack of this kind can hold.
    fn capacity_for(item: &ItemHandle) -> i64;
}

/// Adds two non-negative quantities, saturating at [`NATIVE_MAX`].
///
/// The sum is taken in `u64`, which holds `2 * NATIVE_MAX` without wrapping.
pub(crate) fn saturating_grow(size: i64, amount: i64) -> i64 {
    debug_assert!(size >= 0 && amount >= 0);
    let total = size as u64 + amount as u64;
    if total > NATIVE_MAX as u64 {
        NATIVE_MAX
    } else {
        total as i64
    }
}

/// Tracks the number of units in a stack, ignoring the item's max stack size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BoundedStack {
    item: ItemHandle,
    size: i64,
}

impl BoundedStack {
    pub fn new(item: ItemHandle, size: i64) -> Self {
        let mut stack = Self {
            item,
            size: size.max(0),
        };
        stack.normalize();
        stack
    }

    /// A stack holding one unit of `item`.
    pub fn single(item: ItemHandle) -> Self {
        Self::new(item, 1)
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    /// Keeps `size == 0` and "item is none" in agreement.
    fn normalize(&mut self) {
        if self.size == 0 || self.item.is_none() {
            self.size = 0;
            self.item = ItemHandle::none();
        }
    }
}

impl Stack for BoundedStack {
    fn item(&self) -> &ItemHandle {
        &self.item
    }

    fn grow(&mut self, amount: i64) {
        if amount < 0 || self.item.is_none() {
            return;
        }
        self.size = saturating_grow(self.size, amount);
    }

    fn shrink(&mut self, amount: i64) {
        if amount < 0 {
            return;
        }
        // size >= 0 and amount <= NATIVE_MAX, so this cannot wrap.
        self.size = (self.size - amount).max(0);
        self.normalize();
    }

    fn empty(&mut self) {
        self.size = 0;
        self.normalize();
    }

    fn is_full(&self) -> bool {
        self.size == NATIVE_MAX
    }

    fn is_empty(&self) -> bool {
        self.item.is_none()
    }
}

impl SlotStack for BoundedStack {
    fn create(item: ItemHandle, size: i64) -> Self {
        Self::new(item, size)
    }

    fn size(&self) -> i64 {
        self.size
    }

    fn fill(&mut self) {
        if self.is_empty() {
            return;
        }
        self.size = NATIVE_MAX;
    }

    fn size_left(&self) -> i64 {
        NATIVE_MAX - self.size
    }

    fn capacity_for(item: &ItemHandle) -> i64 {
        if item.is_none() { 0 } else { NATIVE_MAX }
    }
}

impl ValueObject for BoundedStack {}

/// Tracks the number of units in a stack while limiting it to the item's
/// max stack size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LimitedStack {
    inner: BoundedStack,
}

impl LimitedStack {
    /// A stack of `size` units of `item`.
    ///
    /// The size is kept as given, even above the item's max stack size; the
    /// next `grow` or `shrink` clamps it.
    pub fn new(item: ItemHandle, size: i64) -> Self {
        Self {
            inner: BoundedStack::new(item, size),
        }
    }

    pub fn single(item: ItemHandle) -> Self {
        Self::new(item, 1)
    }

    pub fn size(&self) -> i64 {
        self.inner.size
    }

    /// The most this stack can hold for its current item.
    pub fn max_size(&self) -> i64 {
        self.inner.item.max_stack_size().cap()
    }

    /// Clamp the size to between zero and the item's finite max stack size.
    fn clamp(&mut self) {
        if let StackLimit::Finite(max) = self.inner.item.max_stack_size() {
            if max >= 0 && self.inner.size > max {
                self.inner.size = max;
            }
        }
        self.inner.normalize();
    }
}

impl Stack for LimitedStack {
    fn item(&self) -> &ItemHandle {
        &self.inner.item
    }

    fn grow(&mut self, amount: i64) {
        self.inner.grow(amount);
        self.clamp();
    }

    fn shrink(&mut self, amount: i64) {
        self.inner.shrink(amount);
        self.clamp();
    }

    fn empty(&mut self) {
        self.inner.empty();
    }

    fn is_full(&self) -> bool {
        self.inner.size == self.max_size()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl SlotStack for LimitedStack {
    fn create(item: ItemHandle, size: i64) -> Self {
        Self::new(item, size)
    }

    fn size(&self) -> i64 {
        self.inner.size
    }

    fn fill(&mut self) {
        if self.is_empty() {
            return;
        }
        self.inner.size = self.max_size();
        self.inner.normalize();
    }

    fn size_left(&self) -> i64 {
        self.max_size() - self.inner.size
    }

    fn capacity_for(item: &ItemHandle) -> i64 {
        item.max_stack_size().cap()
    }
}

impl ValueObject for LimitedStack {}

impl From<LimitedStack> for BoundedStack {
    fn from(stack: LimitedStack) -> Self {
        stack.inner
    }
}

impl From<BoundedStack> for LimitedStack {
    fn from(stack: BoundedStack) -> Self {
        Self { inner: stack }
    }
}
