//! jp-core - Core library for Joinpath
//!
//! This crate provides the strongly-typed names, relationship hop and path
//! value types, the relationship metadata lookup trait, the mapping document
//! format, and project configuration shared by all Joinpath components.

pub mod column_name;
pub mod config;
pub mod entity_name;
pub mod error;
pub mod hop;
pub mod lookup;
pub mod mapping;
mod newtype_string;
pub mod path;
pub mod predicate;
pub mod relationship_name;
pub mod table_name;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

pub use column_name::ColumnName;
pub use config::{AggregateConfig, Config, Dialect};
pub use entity_name::EntityName;
pub use error::{CoreError, CoreResult};
pub use hop::{EntityRef, Hop, HopKind, Junction};
pub use lookup::RelationshipLookup;
pub use mapping::{EntityDef, JunctionDef, MappingFile, RelationshipDef};
pub use path::{check_adjacency, Direction, Path};
pub use predicate::{ColumnEq, ColumnRef, JoinPredicate};
pub use relationship_name::RelationshipName;
pub use table_name::TableName;
