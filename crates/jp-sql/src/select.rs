//! Plain projections through a relationship chain
//!
//! Unlike an aggregate subquery, every hop (the last one included) is
//! folded into structural joins and there is no correlation predicate.

use crate::error::SqlResult;
use crate::join_chain::{compile, JoinChain};
use jp_core::Hop;
use sqlparser::ast::Expr;

/// `SELECT <projection> FROM <from>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectQuery {
    pub projection: Vec<Expr>,
    pub from: JoinChain,
}

/// Compile the full hop list into one join chain.
pub fn chained_join(hops: &[Hop]) -> SqlResult<JoinChain> {
    compile(hops)
}

/// Project `projection` through the joins of every hop.
///
/// An empty projection renders as `SELECT *`.
pub fn build_select(projection: Vec<Expr>, hops: &[Hop]) -> SqlResult<SelectQuery> {
    Ok(SelectQuery {
        projection,
        from: chained_join(hops)?,
    })
}
