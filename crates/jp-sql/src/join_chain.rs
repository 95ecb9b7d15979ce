//! Join chain compilation
//!
//! A chain is anchored at the target entity of the first hop. Each hop then
//! contributes its junction table (when it has one) followed by its owning
//! entity. Because relationship metadata is declared from the owning side,
//! folding hops in order while joining each hop's *owning* entity walks the
//! chain back toward whichever entity declared the relationships.

use crate::error::SqlResult;
use jp_core::{
    check_adjacency, CoreError, CoreResult, EntityRef, Hop, JoinPredicate, Junction, TableName,
};

/// What a join step brings into the FROM clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JoinTarget {
    /// A mapped entity's table
    Entity(EntityRef),
    /// A many-to-many junction table
    Junction(TableName),
}

impl JoinTarget {
    pub fn table(&self) -> &TableName {
        match self {
            JoinTarget::Entity(entity) => &entity.table,
            JoinTarget::Junction(table) => table,
        }
    }
}

/// One structural `JOIN <target> ON <predicate>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JoinStep {
    pub target: JoinTarget,
    pub on: JoinPredicate,
}

/// A composed FROM expression: an anchor entity plus ordered joins.
///
/// Chains carry no aliases or counters, so compiling the same hops twice
/// yields equal values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JoinChain {
    anchor: EntityRef,
    joins: Vec<JoinStep>,
}

impl JoinChain {
    /// A chain with no joins yet
    pub fn anchored(anchor: EntityRef) -> Self {
        Self {
            anchor,
            joins: Vec::new(),
        }
    }

    pub fn anchor(&self) -> &EntityRef {
        &self.anchor
    }

    pub fn joins(&self) -> &[JoinStep] {
        &self.joins
    }

    /// Fold `hops` onto the chain. An empty slice leaves it unchanged.
    pub fn extend(mut self, hops: &[Hop]) -> CoreResult<Self> {
        check_adjacency(hops)?;
        for hop in hops {
            if let Some(junction) = &hop.junction {
                self.push_junction(junction);
            }
            self.joins.push(JoinStep {
                target: JoinTarget::Entity(hop.owning.clone()),
                on: hop.primary_join.clone(),
            });
        }
        Ok(self)
    }

    /// Join a junction table through its junction predicate
    pub(crate) fn push_junction(&mut self, junction: &Junction) {
        self.joins.push(JoinStep {
            target: JoinTarget::Junction(junction.table.clone()),
            on: junction.junction_join.clone(),
        });
    }

    /// Tables in FROM order, anchor first
    pub fn tables(&self) -> Vec<&TableName> {
        std::iter::once(&self.anchor.table)
            .chain(self.joins.iter().map(|j| j.target.table()))
            .collect()
    }
}

/// Compile hops into a chain anchored at `hops[0]`'s target entity.
///
/// Every hop becomes a structural join; see `build_aggregate` for the
/// variant that holds the last hop back as a correlation predicate.
pub fn compile(hops: &[Hop]) -> SqlResult<JoinChain> {
    let first = hops.first().ok_or(CoreError::EmptyPath)?;
    let chain = JoinChain::anchored(first.target.clone()).extend(hops)?;
    log::debug!(
        "Compiled join chain anchored at {} with {} joins",
        chain.anchor.table,
        chain.joins.len()
    );
    Ok(chain)
}

#[cfg(test)]
#[path = "join_chain_test.rs"]
mod tests;
