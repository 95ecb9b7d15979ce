//! Relationship metadata lookup
//!
//! The compilers never discover schema themselves; everything they know
//! about entities and relationships comes through this trait.

use crate::entity_name::EntityName;
use crate::error::CoreResult;
use crate::hop::{EntityRef, Hop};

/// Source of relationship metadata.
///
/// Implementations must be pure: the same entity and name always yield the
/// same hop, and lookups have no side effects. Any caching is the
/// implementation's business.
pub trait RelationshipLookup: Send + Sync {
    /// Look up a mapped entity by name.
    ///
    /// Fails with `CoreError::UnknownEntity` when the entity is not mapped.
    fn entity(&self, name: &EntityName) -> CoreResult<EntityRef>;

    /// Look up the relationship `name` declared on `entity`.
    ///
    /// Fails with `CoreError::UnknownRelationship` when `entity` declares no
    /// such relationship, and with `CoreError::UnknownEntity` when `entity`
    /// itself is not mapped.
    fn lookup_relationship(&self, entity: &EntityName, name: &str) -> CoreResult<Hop>;
}
