use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::{OrbitError, Result};
use crate::relation::RelationMap;

/// Total number of direct and indirect orbits in the map.
pub fn total_depth(map: &RelationMap) -> Result<usize> {
    let total: usize = depths(map)?.values().sum();
    debug!(orbiters = map.len(), total, "summed orbit depths");

    Ok(total)
}

/// Number of center links between `node` and its root. Roots, and ids the
/// map has never seen, sit at depth zero.
pub fn depth(map: &RelationMap, node: &str) -> Result<usize> {
    match map.key(node) {
        Some(key) => resolve(map, key, &mut HashMap::new()),
        None => Ok(0),
    }
}

/// Depth of every orbiter in the map.
pub fn depths(map: &RelationMap) -> Result<HashMap<&str, usize>> {
    let mut memo = HashMap::with_capacity(map.len());

    for (child, _) in map.iter() {
        resolve(map, child, &mut memo)?;
    }

    Ok(memo)
}

// Walks up from `node` until it hits a root or something already in `memo`,
// then fills in the depths on the way back down. Done with a loop rather than
// recursion since real maps can be one very long chain.
fn resolve<'a>(
    map: &'a RelationMap,
    node: &'a str,
    memo: &mut HashMap<&'a str, usize>,
) -> Result<usize> {
    let mut path = Vec::new();
    let mut on_path = HashSet::new();
    let mut current = node;

    let mut depth = loop {
        if let Some(&known) = memo.get(current) {
            break known;
        }

        let parent = match map.parent_of(current) {
            Some(parent) => parent,
            None => break 0,
        };

        if !on_path.insert(current) {
            return Err(OrbitError::CyclicStructure {
                node: current.to_string(),
            });
        }

        path.push(current);
        current = parent;
    };

    for n in path.into_iter().rev() {
        depth += 1;
        memo.insert(n, depth);
    }

    Ok(depth)
}
