//! Ordered relationship paths
//!
//! A path is what resolving `"orders.items"` against a root entity yields.
//! Paths come out of resolution root-first; reversing one gives the
//! leaf-first order used when a denormalized column on the root is refreshed
//! from the rows at the far end of the path.

use crate::error::{CoreError, CoreResult};
use crate::hop::{EntityRef, Hop};
use serde::Serialize;
use std::ops::Deref;

/// Order in which a path's hops are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// `hops[i].target == hops[i + 1].owning`
    RootFirst,
    /// `hops[i].owning == hops[i + 1].target`
    LeafFirst,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::RootFirst => Direction::LeafFirst,
            Direction::LeafFirst => Direction::RootFirst,
        }
    }

    fn connects(self, prev: &Hop, next: &Hop) -> bool {
        match self {
            Direction::RootFirst => prev.target.name == next.owning.name,
            Direction::LeafFirst => prev.owning.name == next.target.name,
        }
    }

    /// Index of the later hop in the first pair that does not connect
    fn first_break(self, hops: &[Hop]) -> Option<usize> {
        hops.windows(2)
            .position(|pair| !self.connects(&pair[0], &pair[1]))
            .map(|i| i + 1)
    }

    /// The entity `next` must start from for the pair to connect.
    fn expected_entity(self, prev: &Hop) -> &EntityRef {
        match self {
            Direction::RootFirst => &prev.target,
            Direction::LeafFirst => &prev.owning,
        }
    }

    fn found_entity(self, next: &Hop) -> &EntityRef {
        match self {
            Direction::RootFirst => &next.owning,
            Direction::LeafFirst => &next.target,
        }
    }
}

/// Check that adjacent hops share an entity in one consistent direction.
///
/// A direction is accepted only if it holds for every pair; root-first wins
/// when both do (runs of self-referential relationships). Slices of zero or
/// one hop are trivially root-first. When neither holds, the error names the
/// first broken pair of whichever direction reached further.
pub fn check_adjacency(hops: &[Hop]) -> CoreResult<Direction> {
    let root_break = Direction::RootFirst.first_break(hops);
    let Some(root_index) = root_break else {
        return Ok(Direction::RootFirst);
    };
    let Some(leaf_index) = Direction::LeafFirst.first_break(hops) else {
        return Ok(Direction::LeafFirst);
    };

    let (direction, index) = if leaf_index > root_index {
        (Direction::LeafFirst, leaf_index)
    } else {
        (Direction::RootFirst, root_index)
    };
    Err(CoreError::InvalidHopInvariant {
        index,
        expected: direction.expected_entity(&hops[index - 1]).name.to_string(),
        found: direction.found_entity(&hops[index]).name.to_string(),
    })
}

/// A non-empty, adjacency-checked sequence of hops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    hops: Vec<Hop>,
    direction: Direction,
}

impl Path {
    /// Build a path, rejecting empty or disconnected hop lists.
    pub fn new(hops: Vec<Hop>) -> CoreResult<Self> {
        if hops.is_empty() {
            return Err(CoreError::EmptyPath);
        }
        let direction = check_adjacency(&hops)?;
        Ok(Self { hops, direction })
    }

    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The same hops listed in the opposite order.
    pub fn reversed(&self) -> Self {
        let mut hops = self.hops.clone();
        hops.reverse();
        Self {
            hops,
            direction: self.direction.reversed(),
        }
    }

    /// Entity the path starts from: the owning side of the root-most hop.
    pub fn root(&self) -> &EntityRef {
        match self.direction {
            Direction::RootFirst => &self.hops[0].owning,
            Direction::LeafFirst => &self.hops[self.hops.len() - 1].owning,
        }
    }

    /// Entity the path ends at: the target side of the leaf-most hop.
    pub fn leaf(&self) -> &EntityRef {
        match self.direction {
            Direction::RootFirst => &self.hops[self.hops.len() - 1].target,
            Direction::LeafFirst => &self.hops[0].target,
        }
    }

    pub fn into_hops(self) -> Vec<Hop> {
        self.hops
    }
}

impl Deref for Path {
    type Target = [Hop];
    fn deref(&self) -> &[Hop] {
        &self.hops
    }
}

#[cfg(test)]
#[path = "path_test.rs"]
mod tests;
