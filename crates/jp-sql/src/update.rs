//! Denormalization UPDATE statements
//!
//! A denormalized column lives on the root entity of a relationship path
//! and holds an aggregate over the rows at the other end. The path is
//! resolved root-first and then reversed, so the aggregate's join chain
//! starts at the aggregated rows and the root relationship's primary join
//! becomes the correlation predicate against the row being updated.

use crate::aggregate::{build_aggregate, AggregateQuery};
use crate::error::SqlResult;
use crate::parser::SqlParser;
use crate::resolver::resolve;
use jp_core::{AggregateConfig, ColumnName, EntityName, EntityRef, RelationshipLookup, TableName};
use sqlparser::ast::{visit_expressions, Expr};
use std::collections::BTreeSet;
use std::ops::ControlFlow;

/// A column on `entity` maintained as an aggregate over `path`
#[derive(Debug, Clone, PartialEq)]
pub struct DenormalizedColumn {
    pub entity: EntityName,
    pub column: ColumnName,
    /// Dotted relationship path starting at `entity`
    pub path: String,
    pub aggregate: Expr,
    /// Restricts which rows of `entity` are updated
    pub filter: Option<Expr>,
}

impl DenormalizedColumn {
    /// Parse the SQL fragments of a configured aggregate
    pub fn from_config(config: &AggregateConfig, parser: &SqlParser) -> SqlResult<Self> {
        let filter = match &config.filter {
            Some(text) => Some(parser.parse_expr(text)?),
            None => None,
        };
        Ok(Self {
            entity: config.entity.clone(),
            column: config.column.clone(),
            path: config.path.clone(),
            aggregate: parser.parse_expr(&config.expression)?,
            filter,
        })
    }
}

/// `UPDATE <table> SET <column> = (<value>) [WHERE <filter>]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UpdateStatement {
    /// Entity whose table is updated
    pub target: EntityRef,
    pub column: ColumnName,
    pub value: AggregateQuery,
    pub filter: Option<Expr>,
}

/// Build the UPDATE statement refreshing a denormalized column.
pub fn denormalize(
    lookup: &dyn RelationshipLookup,
    column: &DenormalizedColumn,
) -> SqlResult<UpdateStatement> {
    let path = resolve(lookup, &column.entity, &column.path)?;
    let target = path.root().clone();
    let leaf_first = path.reversed();
    let value = build_aggregate(column.aggregate.clone(), leaf_first.hops())?;

    if !value.correlation.references(&target.table) {
        log::warn!(
            "{}.{}: correlation '{}' does not reference '{}'",
            column.entity,
            column.column,
            value.correlation,
            target.table
        );
    }
    for table in foreign_tables(&column.aggregate, &value, &target.table) {
        log::warn!(
            "{}.{}: aggregate '{}' references '{}', which is not joined",
            column.entity,
            column.column,
            column.aggregate,
            table
        );
    }

    Ok(UpdateStatement {
        target,
        column: column.column.clone(),
        value,
        filter: column.filter.clone(),
    })
}

/// Table qualifiers used in `expr` that are neither joined nor the outer table
fn foreign_tables(expr: &Expr, query: &AggregateQuery, outer: &TableName) -> BTreeSet<String> {
    let joined: BTreeSet<&str> = query.from.tables().into_iter().map(|t| t.as_str()).collect();
    let mut foreign = BTreeSet::new();
    let _ = visit_expressions(expr, |e| {
        if let Expr::CompoundIdentifier(parts) = e {
            if let [table @ .., _] = parts.as_slice() {
                let table = table
                    .iter()
                    .map(|ident| ident.value.as_str())
                    .collect::<Vec<_>>()
                    .join(".");
                if !table.is_empty() && !joined.contains(table.as_str()) && table != outer.as_str()
                {
                    foreign.insert(table);
                }
            }
        }
        ControlFlow::<()>::Continue(())
    });
    foreign
}

#[cfg(test)]
#[path = "update_test.rs"]
mod tests;
