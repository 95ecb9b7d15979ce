//! Resolved relationship traversals

use crate::entity_name::EntityName;
use crate::predicate::JoinPredicate;
use crate::relationship_name::RelationshipName;
use crate::table_name::TableName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A mapped entity type and the table it is stored in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub name: EntityName,
    pub table: TableName,
}

impl EntityRef {
    pub fn new(name: EntityName, table: TableName) -> Self {
        Self { name, table }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.table)
    }
}

/// The intermediate table of a many-to-many relationship.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Junction {
    /// Junction table name
    pub table: TableName,
    /// Predicate relating the junction table to the target entity's table
    pub junction_join: JoinPredicate,
}

/// Shape of a hop, derived from whether it goes through a junction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HopKind {
    /// Foreign key between owning and target tables
    Direct,
    /// Through a junction table
    ManyToMany,
}

impl fmt::Display for HopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HopKind::Direct => write!(f, "direct"),
            HopKind::ManyToMany => write!(f, "many-to-many"),
        }
    }
}

/// One resolved relationship traversal from `owning` to `target`.
///
/// `primary_join` relates the owning table to the target table, or to the
/// junction table when `junction` is present. Relationship metadata is
/// always declared from the owning side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hop {
    /// Relationship attribute name on the owning entity
    pub name: RelationshipName,
    /// Entity declaring the relationship (near side)
    pub owning: EntityRef,
    /// Entity reached by following it (far side)
    pub target: EntityRef,
    pub primary_join: JoinPredicate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub junction: Option<Junction>,
}

impl Hop {
    pub fn kind(&self) -> HopKind {
        if self.junction.is_some() {
            HopKind::ManyToMany
        } else {
            HopKind::Direct
        }
    }
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} -> {}", self.owning.name, self.name, self.target.name)
    }
}
