//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values. Immutability also makes them safe to
/// share across threads without locking.
///
/// The trait requires:
/// - **Clone**: values are copied, not referenced
/// - **PartialEq**: comparison is over attribute values
/// - **Debug**: values show up in logs and test failures
///
/// ## Usage Pattern
///
/// ```
/// use harvest_core::ValueObject;
///
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Weight {
///     grams: u32,
/// }
///
/// impl ValueObject for Weight {}
///
/// let a = Weight { grams: 12 };
/// let b = Weight { grams: 12 };
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
