//! Mapping document format (mapping.yml)
//!
//! A mapping document declares entities, the tables they live in, and the
//! relationships each entity owns. Join predicates are kept as SQL text here;
//! the SQL layer parses them into structural predicates when it builds a
//! lookup registry.

use crate::entity_name::EntityName;
use crate::error::{CoreError, CoreResult};
use crate::relationship_name::RelationshipName;
use crate::table_name::TableName;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A mapping document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingFile {
    #[serde(default)]
    pub entities: Vec<EntityDef>,
}

/// A mapped entity type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityDef {
    /// Entity type name used in paths and aggregate declarations
    pub name: EntityName,

    /// Table the entity is stored in
    pub table: TableName,

    /// Relationships declared on this entity
    #[serde(default)]
    pub relationships: Vec<RelationshipDef>,
}

/// A relationship declared on its owning entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelationshipDef {
    /// Attribute name used as a path segment
    pub name: RelationshipName,

    /// Target entity name
    pub target: EntityName,

    /// Predicate relating the owning table to the target table, or to the
    /// junction table when `junction` is set (e.g. `orders.customer_id = customers.id`)
    pub primary_join: String,

    /// Junction table for many-to-many relationships
    #[serde(default)]
    pub junction: Option<JunctionDef>,
}

/// Junction table of a many-to-many relationship
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JunctionDef {
    pub table: TableName,

    /// Predicate relating the junction table to the target table
    pub join: String,
}

impl MappingFile {
    /// Load a mapping document from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let mapping: MappingFile =
            serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        log::debug!(
            "Loaded {} entities from {}",
            mapping.entities.len(),
            path.display()
        );
        Ok(mapping)
    }

    /// Parse a mapping document from YAML text
    pub fn from_yaml(yaml: &str) -> CoreResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Append the entities of `other` after this document's entities
    pub fn merge(&mut self, other: MappingFile) {
        self.entities.extend(other.entities);
    }
}

#[cfg(test)]
#[path = "mapping_test.rs"]
mod tests;
