//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Entities are compared by identity. Two products with the same name, price and
/// quantity are still different entities unless their ids match.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// True when both values refer to the same entity.
    fn same_entity(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.id() == other.id()
    }
}
