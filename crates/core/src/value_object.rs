//! Value object trait: equality by value, not identity.
//!
//! Stacks, count results and item definitions are all value objects: two of
//! them holding the same values are interchangeable.

/// Marker trait for value objects.
///
/// Value objects are compared by their attribute values and are copied by
/// cloning. Inventory values are mutated in place through their own
/// operations (`grow`, `shrink`, ...), but a clone is always fully
/// independent of the original.
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: a copy never aliases the original
/// - **PartialEq**: compared by attribute values
/// - **Debug**: debuggable in logs and test failures
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Weight {
///     grams: i64,
/// }
///
/// impl ValueObject for Weight {}
///
/// assert_eq!(Weight { grams: 5 }, Weight { grams: 5 });
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
