//! Fixed-size containers of stacks.
//!
//! A container is an ordered row of slots. Adding prefers topping up slots
//! that already hold the item, then opens empty slots, lowest index first.
//! Removal drains matching slots in the same order.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use invstack_core::ValueObject;

use crate::config::ContainerConfig;
use crate::item::ItemHandle;
use crate::stack::{BoundedStack, LimitedStack, NATIVE_MAX, SlotStack, Stack};
use crate::unbounded::UnboundedStack;

/// Container of bounded stacks; a slot holds up to [`NATIVE_MAX`] units.
pub type Container = SlotContainer<BoundedStack>;

/// Container of limited stacks; a slot holds up to the item's max stack size.
pub type LimitedContainer = SlotContainer<LimitedStack>;

/// Result of counting an item: the amount, and whether the true total was
/// larger than [`NATIVE_MAX`] (the amount is then clamped to it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CountResult {
    pub amount: i64,
    pub has_overflow: bool,
}

impl ValueObject for CountResult {}

/// Moves `amount` units out of `stack`, bypassing the kind's size limit so
/// an oversized limited stack keeps the exact remainder.
fn take_units<T: SlotStack>(stack: &mut T, amount: i64) {
    let left = stack.size() - amount;
    *stack = T::create(stack.item().clone(), left);
}

/// A fixed number of slots, each holding one stack of kind `S`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotContainer<S: SlotStack> {
    slots: Box<[S]>,
}

impl<S: SlotStack> Default for SlotContainer<S> {
    fn default() -> Self {
        Self::with_config(ContainerConfig::default())
    }
}

impl<S: SlotStack> SlotContainer<S> {
    pub fn new(slots: usize) -> Self {
        Self::with_config(ContainerConfig::default().with_slots(slots))
    }

    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            slots: (0..config.slots).map(|_| S::empty_stack()).collect(),
        }
    }

    /// The number of slots.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.slots.iter()
    }

    /// Whether every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_empty())
    }

    /// A copy of the stack at `index`, or the empty stack if out of bounds.
    pub fn get(&self, index: usize) -> S {
        self.slots
            .get(index)
            .map(|slot| slot.copy())
            .unwrap_or_else(S::empty_stack)
    }

    /// Store `stack` at `index` and return the stack it replaced.
    ///
    /// If `index` is out of bounds nothing changes and `stack` is returned.
    pub fn set(&mut self, index: usize, stack: S) -> S {
        match self.slots.get_mut(index) {
            Some(slot) => core::mem::replace(slot, stack),
            None => stack,
        }
    }

    /// Take the stack at `index` out of the container.
    ///
    /// Returns the empty stack if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> S {
        self.set(index, S::empty_stack())
    }

    /// Index of the first empty slot.
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(|slot| slot.is_empty())
    }

    /// Index of the first slot holding `item`.
    pub fn position_of(&self, item: &ItemHandle) -> Option<usize> {
        if item.is_none() {
            return None;
        }
        self.slots.iter().position(|slot| slot.item() == item)
    }

    fn first_not_filled(&self, item: &ItemHandle) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.item() == item && slot.size_left() > 0)
    }

    fn matching_mut<'a>(&'a mut self, item: &'a ItemHandle) -> impl Iterator<Item = (usize, &'a mut S)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter(move |(_, slot)| slot.item() == item)
    }

    /// Moves as much of `stack` as fits into this container.
    ///
    /// Slots already holding the item are topped up first, then empty slots
    /// are opened, lowest index first. Whatever does not fit stays in
    /// `stack`; a full container leaves it untouched.
    pub fn add<T: SlotStack>(&mut self, stack: &mut T) {
        let item = stack.item().clone();
        let offered = stack.size();

        while !stack.is_empty() {
            if let Some(index) = self.first_not_filled(&item) {
                let slot = &mut self.slots[index];
                let moved = slot.size_left().min(stack.size());
                slot.grow(moved);
                take_units(stack, moved);
                trace!(item = %item, slot = index, moved, "topped up slot");
            } else if let Some(index) = self.first_empty() {
                let moved = S::capacity_for(&item).min(stack.size());
                if moved <= 0 {
                    break;
                }
                self.slots[index] = S::create(item.clone(), moved);
                take_units(stack, moved);
                trace!(item = %item, slot = index, moved, "opened slot");
            } else {
                break;
            }
        }

        debug!(
            item = %item,
            deposited = offered - stack.size(),
            remainder = stack.size(),
            "added stack to container"
        );
    }

    /// Counts `item` across all slots, clamping at [`NATIVE_MAX`].
    pub fn count(&self, item: &ItemHandle) -> CountResult {
        let mut result = CountResult::default();
        if item.is_none() {
            return result;
        }

        for slot in self.slots.iter().filter(|slot| slot.item() == item) {
            match result.amount.checked_add(slot.size()) {
                Some(sum) => result.amount = sum,
                None => {
                    result.amount = NATIVE_MAX;
                    result.has_overflow = true;
                }
            }
        }

        result
    }

    /// Counts `item` across all slots exactly.
    pub fn count_large(&self, item: &ItemHandle) -> BigUint {
        if item.is_none() {
            return BigUint::zero();
        }

        self.slots
            .iter()
            .filter(|slot| slot.item() == item)
            .map(|slot| BigUint::from(slot.size() as u64))
            .sum()
    }

    /// Removes up to `amount` of `item` and returns what was removed.
    ///
    /// The result is smaller than `amount` only if the container holds less.
    /// It is a bounded stack for every container kind, since the removed
    /// quantity may span several limited slots.
    pub fn remove_amount(&mut self, item: &ItemHandle, amount: i64) -> BoundedStack {
        if amount <= 0 || item.is_none() {
            return BoundedStack::empty_stack();
        }

        let mut remaining = amount;
        let mut removed = 0i64;

        for (index, slot) in self.matching_mut(item) {
            if remaining == 0 {
                break;
            }
            let take = slot.size().min(remaining);
            take_units(slot, take);
            removed += take;
            remaining -= take;
            trace!(item = %item, slot = index, take, "drained slot");
        }

        debug!(item = %item, requested = amount, removed, "removed amount from container");
        BoundedStack::new(item.clone(), removed)
    }

    /// Removes up to `amount` of `item`, which may exceed [`NATIVE_MAX`].
    pub fn remove_amount_large(&mut self, item: &ItemHandle, amount: &BigUint) -> UnboundedStack {
        if item.is_none() {
            return UnboundedStack::default();
        }

        let mut removed = UnboundedStack::new(item.clone(), BigUint::zero());
        let mut remaining = amount.clone();

        for (index, slot) in self.matching_mut(item) {
            if remaining.is_zero() {
                break;
            }
            let take = match remaining.to_i64() {
                Some(left) => slot.size().min(left),
                None => slot.size(),
            };
            take_units(slot, take);
            removed.grow(take);
            remaining -= take as u64;
            trace!(item = %item, slot = index, take, "drained slot");
        }

        removed.normalize();
        debug!(
            item = %item,
            requested = %amount,
            removed = %removed.full_size(),
            "removed large amount from container"
        );
        removed
    }
}

impl<'a, S: SlotStack> IntoIterator for &'a SlotContainer<S> {
    type Item = &'a S;
    type IntoIter = core::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
