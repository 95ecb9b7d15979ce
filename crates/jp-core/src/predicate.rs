//! Join predicates between mapped tables
//!
//! A predicate is kept structural (qualified column pairs) rather than as
//! SQL text so that compiled chains can be compared for equality and
//! rendered for any dialect.

use crate::column_name::ColumnName;
use crate::table_name::TableName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A table-qualified column reference (`orders.customer_id`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnRef {
    /// Table the column belongs to
    pub table: TableName,
    /// Column name
    pub column: ColumnName,
}

impl ColumnRef {
    pub fn new(table: TableName, column: ColumnName) -> Self {
        Self { table, column }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.column)
    }
}

/// A single `left = right` column equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnEq {
    pub left: ColumnRef,
    pub right: ColumnRef,
}

impl fmt::Display for ColumnEq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.left, self.right)
    }
}

/// A conjunction of column equalities.
///
/// Never empty: a relationship always joins on at least one column pair.
/// Composite keys produce one `ColumnEq` per key column, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<ColumnEq>", into = "Vec<ColumnEq>")]
pub struct JoinPredicate(Vec<ColumnEq>);

impl JoinPredicate {
    /// Build a single-column equality predicate.
    pub fn single(left: ColumnRef, right: ColumnRef) -> Self {
        Self(vec![ColumnEq { left, right }])
    }

    /// Build a conjunction, returning `None` when `terms` is empty.
    pub fn all(terms: Vec<ColumnEq>) -> Option<Self> {
        if terms.is_empty() {
            None
        } else {
            Some(Self(terms))
        }
    }

    /// The equalities, in declaration order.
    pub fn terms(&self) -> &[ColumnEq] {
        &self.0
    }

    /// Whether any side of any equality refers to `table`.
    pub fn references(&self, table: &TableName) -> bool {
        self.0
            .iter()
            .any(|term| &term.left.table == table || &term.right.table == table)
    }

    /// Distinct tables referenced, in first-seen order.
    pub fn tables(&self) -> Vec<&TableName> {
        let mut seen: Vec<&TableName> = Vec::new();
        for term in &self.0 {
            for table in [&term.left.table, &term.right.table] {
                if !seen.contains(&table) {
                    seen.push(table);
                }
            }
        }
        seen
    }
}

impl TryFrom<Vec<ColumnEq>> for JoinPredicate {
    type Error = &'static str;

    fn try_from(terms: Vec<ColumnEq>) -> Result<Self, Self::Error> {
        Self::all(terms).ok_or("join predicate must have at least one equality")
    }
}

impl From<JoinPredicate> for Vec<ColumnEq> {
    fn from(predicate: JoinPredicate) -> Self {
        predicate.0
    }
}

impl fmt::Display for JoinPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "predicate_test.rs"]
mod tests;
