//! Black-box checks of the slot distribution policy through the public API.

use invstack_inventory::{
    BoundedStack, Container, ContainerConfig, Item, ItemDef, ItemHandle, LimitedContainer,
    LimitedStack, NATIVE_MAX, SlotStack, Stack, StackLimit, UnboundedStack,
};
use invstack_observability::subscriber::init_for_tests;
use num_bigint::BigUint;

/// Item type owned by a catalog outside the library.
#[derive(Debug)]
struct CatalogItem {
    id: String,
    max: i64,
}

impl Item for CatalogItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn max_stack_size(&self) -> StackLimit {
        StackLimit::Finite(self.max)
    }
}

fn catalog_item(id: &str, max: i64) -> ItemHandle {
    ItemHandle::new(CatalogItem {
        id: id.to_string(),
        max,
    })
    .unwrap()
}

#[test]
fn fifteen_units_of_a_ten_stack_fill_two_slots() {
    init_for_tests();
    let item = catalog_item("arrow", 10);
    let mut container = LimitedContainer::new(2);

    let mut input = BoundedStack::new(item.clone(), 15);
    container.add(&mut input);

    assert_eq!(container.get(0).size(), 10);
    assert_eq!(container.get(1).size(), 5);
    assert!(input.is_empty());
}

#[test]
fn fifteen_limited_units_fill_two_slots_and_come_back_out() {
    init_for_tests();
    let item = catalog_item("arrow", 10);
    let mut container = LimitedContainer::new(2);

    let mut input = LimitedStack::new(item.clone(), 15);
    container.add(&mut input);

    assert_eq!(container.get(0).size(), 10);
    assert_eq!(container.get(1).size(), 5);
    assert!(input.is_empty());

    let removed = container.remove_amount(&item, 15);
    assert_eq!(removed, BoundedStack::new(item, 15));
    assert!(container.is_empty());
}

#[test]
fn mixed_items_share_a_container() {
    init_for_tests();
    let arrow = catalog_item("arrow", 16);
    let stone = catalog_item("stone", 64);
    let mut container = LimitedContainer::with_config(ContainerConfig::default().with_slots(4));

    container.add(&mut BoundedStack::new(arrow.clone(), 20));
    container.add(&mut BoundedStack::new(stone.clone(), 70));
    container.add(&mut BoundedStack::new(arrow.clone(), 12));

    // The second arrow stack tops up slot 1 instead of opening a slot.
    let sizes: Vec<(String, i64)> = container
        .iter()
        .map(|slot| (slot.item().to_string(), slot.size()))
        .collect();
    assert_eq!(
        sizes,
        vec![
            ("arrow".to_string(), 16),
            ("arrow".to_string(), 16),
            ("stone".to_string(), 64),
            ("stone".to_string(), 6),
        ]
    );

    let mut more_arrows = BoundedStack::new(arrow.clone(), 3);
    container.add(&mut more_arrows);
    assert_eq!(more_arrows.size(), 3);
}

#[test]
fn draining_leaves_freed_slots_for_other_items() {
    init_for_tests();
    let arrow = catalog_item("arrow", 10);
    let stone = catalog_item("stone", 10);
    let mut container = LimitedContainer::new(2);

    container.add(&mut BoundedStack::new(arrow.clone(), 20));
    let removed = container.remove_amount(&arrow, 10);
    assert_eq!(removed, BoundedStack::new(arrow.clone(), 10));
    assert_eq!(container.first_empty(), Some(0));

    container.add(&mut BoundedStack::new(stone.clone(), 4));
    assert_eq!(container.get(0), LimitedStack::new(stone, 4));
    assert_eq!(container.position_of(&arrow), Some(1));
}

#[test]
fn huge_quantities_round_trip_through_unbounded_stacks() {
    init_for_tests();
    let gold = ItemDef::unbounded("gold").unwrap().into_handle().unwrap();
    let mut container = Container::new(3);
    for _ in 0..3 {
        container.add(&mut BoundedStack::new(gold.clone(), NATIVE_MAX));
    }

    let count = container.count(&gold);
    assert!(count.has_overflow);
    assert_eq!(count.amount, NATIVE_MAX);

    let max = BigUint::from(NATIVE_MAX as u64);
    assert_eq!(container.count_large(&gold), &max * 3u32);

    let removed = container.remove_amount_large(&gold, &(&max * 2u32 + 7u32));
    assert_eq!(removed.full_size(), &max * 2u32 + 7u32);
    assert_eq!(container.count_large(&gold), &max - 7u32);

    let mut rest = UnboundedStack::from(container.remove(2));
    assert_eq!(rest.full_size(), &max - 7u32);
    rest.shrink(NATIVE_MAX);
    assert!(rest.is_empty());
    assert!(container.is_empty());
}

#[test]
fn set_of_get_preserves_contents() {
    init_for_tests();
    let item = catalog_item("torch", 64);
    let mut container = LimitedContainer::new(3);
    container.add(&mut BoundedStack::new(item, 100));
    let before = container.clone();

    for index in 0..container.size() {
        let slot = container.get(index);
        container.set(index, slot);
    }

    assert_eq!(container, before);
    assert_eq!(LimitedStack::empty_stack(), container.get(2));
}
