//! Relationship registry built from mapping documents
//!
//! `Mapping` is the concrete metadata collaborator: it turns the textual
//! mapping format into resolved `Hop`s once, then answers lookups from
//! immutable maps.

use crate::error::SqlResult;
use crate::parser::SqlParser;
use crate::predicate::parse_join_predicate;
use jp_core::{
    CoreError, CoreResult, EntityName, EntityRef, Hop, Junction, MappingFile, RelationshipDef,
    RelationshipLookup,
};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone)]
struct MappedEntity {
    entity: EntityRef,
    /// Relationships in declaration order
    relationships: Vec<Hop>,
}

/// Immutable registry of entities and their relationships
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    entities: BTreeMap<EntityName, MappedEntity>,
}

impl Mapping {
    /// Build a registry from a parsed mapping document.
    ///
    /// Rejects duplicate entities, duplicate relationship names on one
    /// entity, relationships targeting unmapped entities, and predicates
    /// that are not conjunctions of qualified column equalities.
    pub fn from_file(file: &MappingFile, parser: &SqlParser) -> SqlResult<Self> {
        let mut entities: BTreeMap<EntityName, MappedEntity> = BTreeMap::new();
        for def in &file.entities {
            if entities.contains_key(&def.name) {
                return Err(CoreError::DuplicateEntity {
                    entity: def.name.to_string(),
                }
                .into());
            }
            entities.insert(
                def.name.clone(),
                MappedEntity {
                    entity: EntityRef::new(def.name.clone(), def.table.clone()),
                    relationships: Vec::new(),
                },
            );
        }

        for def in &file.entities {
            let owning = entities[&def.name].entity.clone();
            let mut hops: Vec<Hop> = Vec::with_capacity(def.relationships.len());
            for rel in &def.relationships {
                if hops.iter().any(|h| h.name == rel.name) {
                    return Err(CoreError::DuplicateRelationship {
                        entity: def.name.to_string(),
                        relationship: rel.name.to_string(),
                    }
                    .into());
                }
                let target = entities
                    .get(&rel.target)
                    .map(|m| m.entity.clone())
                    .ok_or_else(|| CoreError::UnknownEntity {
                        entity: rel.target.to_string(),
                    })?;
                hops.push(build_hop(owning.clone(), target, rel, parser)?);
            }
            if let Some(mapped) = entities.get_mut(&def.name) {
                mapped.relationships = hops;
            }
        }

        log::debug!("Built mapping with {} entities", entities.len());
        Ok(Self { entities })
    }

    /// Load and merge mapping documents in order, then build the registry
    pub fn load(paths: &[PathBuf], parser: &SqlParser) -> SqlResult<Self> {
        let mut merged = MappingFile::default();
        for path in paths {
            merged.merge(MappingFile::load(path)?);
        }
        Self::from_file(&merged, parser)
    }

    /// Parse a mapping document from YAML text and build the registry
    pub fn from_yaml(yaml: &str, parser: &SqlParser) -> SqlResult<Self> {
        Self::from_file(&MappingFile::from_yaml(yaml)?, parser)
    }

    /// All mapped entities, sorted by name
    pub fn entities(&self) -> impl Iterator<Item = &EntityRef> {
        self.entities.values().map(|m| &m.entity)
    }

    /// Relationships declared on `entity`, in declaration order
    pub fn relationships(&self, entity: &EntityName) -> CoreResult<&[Hop]> {
        self.get(entity).map(|m| m.relationships.as_slice())
    }

    fn get(&self, entity: &EntityName) -> CoreResult<&MappedEntity> {
        self.entities
            .get(entity)
            .ok_or_else(|| CoreError::UnknownEntity {
                entity: entity.to_string(),
            })
    }
}

impl RelationshipLookup for Mapping {
    fn entity(&self, name: &EntityName) -> CoreResult<EntityRef> {
        self.get(name).map(|m| m.entity.clone())
    }

    fn lookup_relationship(&self, entity: &EntityName, name: &str) -> CoreResult<Hop> {
        self.get(entity)?
            .relationships
            .iter()
            .find(|h| h.name == name)
            .cloned()
            .ok_or_else(|| CoreError::UnknownRelationship {
                entity: entity.to_string(),
                relationship: name.to_string(),
            })
    }
}

fn build_hop(
    owning: EntityRef,
    target: EntityRef,
    rel: &RelationshipDef,
    parser: &SqlParser,
) -> SqlResult<Hop> {
    let primary_join = parse_join_predicate(parser, &rel.primary_join)?;
    let junction = match &rel.junction {
        Some(def) => Some(Junction {
            table: def.table.clone(),
            junction_join: parse_join_predicate(parser, &def.join)?,
        }),
        None => None,
    };

    // The far side of the primary join is the junction table when present.
    let far_table = junction.as_ref().map_or(&target.table, |j| &j.table);
    if !primary_join.references(&owning.table) || !primary_join.references(far_table) {
        log::warn!(
            "Relationship {}.{}: primary join '{}' does not relate '{}' to '{}'",
            owning.name,
            rel.name,
            primary_join,
            owning.table,
            far_table
        );
    }
    if let Some(j) = &junction {
        if !j.junction_join.references(&j.table) || !j.junction_join.references(&target.table) {
            log::warn!(
                "Relationship {}.{}: junction join '{}' does not relate '{}' to '{}'",
                owning.name,
                rel.name,
                j.junction_join,
                j.table,
                target.table
            );
        }
    }

    Ok(Hop {
        name: rel.name.clone(),
        owning,
        target,
        primary_join,
        junction,
    })
}

#[cfg(test)]
#[path = "mapping_test.rs"]
mod tests;
