//! Relationship path resolution
//!
//! Walks a dotted path such as `orders.items` from a root entity, looking up
//! each segment on the entity reached so far.

use crate::error::{SqlError, SqlResult};
use jp_core::{CoreError, EntityName, Path, RelationshipLookup};

/// Resolve `path` against `root`, returning one hop per segment.
///
/// Fails without a partial result when the path is empty, contains an empty
/// segment, the root is not mapped, or a segment does not name a
/// relationship on the entity reached before it.
pub fn resolve(lookup: &dyn RelationshipLookup, root: &EntityName, path: &str) -> SqlResult<Path> {
    let path = path.trim();
    if path.is_empty() {
        return Err(CoreError::EmptyPath.into());
    }

    let segments: Vec<&str> = path.split('.').map(str::trim).collect();
    if let Some(pos) = segments.iter().position(|s| s.is_empty()) {
        return Err(SqlError::InvalidPath {
            path: path.to_string(),
            reason: format!("segment {} is empty", pos + 1),
        });
    }

    let mut current = lookup.entity(root)?.name;
    let mut hops = Vec::with_capacity(segments.len());
    for (index, segment) in segments.into_iter().enumerate() {
        let hop = lookup.lookup_relationship(&current, segment)?;
        if hop.owning.name != current {
            return Err(CoreError::InvalidHopInvariant {
                index,
                expected: current.to_string(),
                found: hop.owning.name.to_string(),
            }
            .into());
        }
        log::debug!("Resolved '{}' segment {}: {}", path, index, hop);
        current = hop.target.name.clone();
        hops.push(hop);
    }

    Ok(Path::new(hops)?)
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
