//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// - **Value Object**: no identity (`Price::from_cents(1500)` equals any other 15.00)
/// - **Entity**: has identity (two parts with the same name are still different parts)
///
/// Value objects are replaced, never patched: to "modify" one, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
