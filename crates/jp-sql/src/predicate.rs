//! Join predicate parsing
//!
//! Mapping documents spell join predicates as SQL text. They are parsed with
//! the configured dialect and lowered into structural `JoinPredicate`s: a
//! conjunction of equalities between table-qualified columns.

use crate::error::{SqlError, SqlResult};
use crate::parser::SqlParser;
use jp_core::{ColumnEq, ColumnName, ColumnRef, JoinPredicate, TableName};
use sqlparser::ast::{BinaryOperator, Expr, Ident};

/// Parse `orders.customer_id = customers.id [AND ...]` into a predicate.
pub fn parse_join_predicate(parser: &SqlParser, text: &str) -> SqlResult<JoinPredicate> {
    let expr = parser.parse_expr(text)?;
    let mut terms = Vec::new();
    collect_equalities(&expr, text, &mut terms)?;
    JoinPredicate::all(terms).ok_or_else(|| invalid(text, "no equalities found"))
}

fn collect_equalities(expr: &Expr, text: &str, out: &mut Vec<ColumnEq>) -> SqlResult<()> {
    match expr {
        Expr::Nested(inner) => collect_equalities(inner, text, out),
        Expr::BinaryOp {
            left,
            op: BinaryOperator::And,
            right,
        } => {
            collect_equalities(left, text, out)?;
            collect_equalities(right, text, out)
        }
        Expr::BinaryOp {
            left,
            op: BinaryOperator::Eq,
            right,
        } => {
            out.push(ColumnEq {
                left: column_ref(left, text)?,
                right: column_ref(right, text)?,
            });
            Ok(())
        }
        other => Err(invalid(
            text,
            &format!("expected `table.column = table.column`, found `{}`", other),
        )),
    }
}

fn column_ref(expr: &Expr, text: &str) -> SqlResult<ColumnRef> {
    match expr {
        Expr::Nested(inner) => column_ref(inner, text),
        Expr::CompoundIdentifier(parts) => match parts.as_slice() {
            [table @ .., column] if !table.is_empty() => {
                let table = table
                    .iter()
                    .map(|ident| ident.value.as_str())
                    .collect::<Vec<_>>()
                    .join(".");
                Ok(ColumnRef::new(
                    TableName::try_new(table.as_str()).ok_or_else(|| {
                        invalid(text, &format!("`{}` is not a valid table name", table))
                    })?,
                    identifier(column, text, |s| ColumnName::try_new(s))?,
                ))
            }
            _ => Err(invalid(
                text,
                &format!("`{}` must be `table.column`", expr),
            )),
        },
        Expr::Identifier(ident) => Err(invalid(
            text,
            &format!("column `{}` must be qualified with its table", ident.value),
        )),
        other => Err(invalid(
            text,
            &format!("`{}` is not a column reference", other),
        )),
    }
}

fn identifier<T>(
    ident: &Ident,
    text: &str,
    make: impl FnOnce(String) -> Option<T>,
) -> SqlResult<T> {
    make(ident.value.clone()).ok_or_else(|| {
        invalid(
            text,
            &format!("`{}` is not a valid identifier", ident.value),
        )
    })
}

fn invalid(text: &str, reason: &str) -> SqlError {
    SqlError::InvalidPredicate {
        predicate: text.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
#[path = "predicate_test.rs"]
mod tests;
