//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Entities are compared by identifier, never by content. Their identifiers are
/// assigned once at construction and do not participate in the structural
/// equality of any value object they contain.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison: the same entity iff the identifiers match.
    ///
    /// Distinct from structural equality - two entities with identical content
    /// but freshly generated identifiers are different entities.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
