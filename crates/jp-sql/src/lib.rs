//! jp-sql - SQL layer for Joinpath
//!
//! This crate resolves dotted relationship paths against a mapping, compiles
//! them into join chains, and assembles correlated aggregate subqueries and
//! denormalization UPDATE statements. Parsing and validation go through
//! sqlparser-rs with dialect support.

pub mod aggregate;
pub mod dialect;
pub mod error;
pub mod join_chain;
pub mod mapping;
pub mod parser;
pub mod predicate;
pub mod render;
pub mod resolver;
pub mod select;
pub mod update;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

pub use aggregate::{build_aggregate, AggregateQuery};
pub use dialect::{DuckDbDialect, PostgresDialect, SnowflakeDialect, SqlDialect};
pub use error::{SqlError, SqlResult};
pub use join_chain::{compile, JoinChain, JoinStep, JoinTarget};
pub use mapping::Mapping;
pub use parser::SqlParser;
pub use predicate::parse_join_predicate;
pub use render::{Quoting, Renderer};
pub use resolver::resolve;
pub use select::{build_select, chained_join, SelectQuery};
pub use update::{denormalize, DenormalizedColumn, UpdateStatement};
