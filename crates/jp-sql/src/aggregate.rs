//! Correlated aggregate subqueries
//!
//! The last hop of the path is not joined. Its primary join becomes the
//! WHERE predicate that binds the subquery to the row of the enclosing
//! statement, typically the row an UPDATE is assigning a denormalized
//! column on.

use crate::error::SqlResult;
use crate::join_chain::JoinChain;
use jp_core::{check_adjacency, CoreError, Hop, JoinPredicate};
use sqlparser::ast::Expr;

/// `SELECT <aggregate> FROM <from> WHERE <correlation>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AggregateQuery {
    pub aggregate: Expr,
    pub from: JoinChain,
    /// References the outer statement's row, never joined
    pub correlation: JoinPredicate,
}

/// Build a correlated aggregate subquery over `hops`.
///
/// The chain is anchored at `hops[0]`'s target and folds `hops[..n-1]`;
/// the last hop only contributes its junction table (if any) as a join and
/// its primary join as the correlation predicate.
pub fn build_aggregate(aggregate: Expr, hops: &[Hop]) -> SqlResult<AggregateQuery> {
    let (last, init) = hops.split_last().ok_or(CoreError::EmptyPath)?;
    check_adjacency(hops)?;

    let mut from = JoinChain::anchored(hops[0].target.clone()).extend(init)?;
    if let Some(junction) = &last.junction {
        from.push_junction(junction);
    }

    log::debug!(
        "Built aggregate over {} hops, correlated on {}",
        hops.len(),
        last.primary_join
    );

    Ok(AggregateQuery {
        aggregate,
        from,
        correlation: last.primary_join.clone(),
    })
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
