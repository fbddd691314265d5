use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::{OrbitError, Result};
use crate::relation::RelationMap;

/// Minimum number of orbital transfers needed to go from the object `from`
/// orbits to the object `to` orbits.
pub fn transfers(map: &RelationMap, from: &str, to: &str) -> Result<usize> {
    let from_chain = chain(map, from)?;
    let to_chain = chain(map, to)?;

    let positions: HashMap<&str, usize> = to_chain
        .iter()
        .enumerate()
        .map(|(i, node)| (*node, i))
        .collect();

    let (common, count) = from_chain
        .iter()
        .enumerate()
        .find_map(|(i, node)| positions.get(node).map(|j| (*node, i + j)))
        .ok_or_else(|| OrbitError::NoCommonAncestor {
            from: from.to_string(),
            to: to.to_string(),
        })?;

    debug!(from, to, common, count, "planned transfers");

    Ok(count)
}

fn chain<'a>(map: &'a RelationMap, id: &str) -> Result<Vec<&'a str>> {
    if !map.contains(id) {
        return Err(OrbitError::UnknownObject { id: id.to_string() });
    }

    let mut seen = HashSet::new();
    let mut chain = Vec::new();

    for node in map.ancestors(id) {
        if !seen.insert(node) {
            return Err(OrbitError::CyclicStructure {
                node: node.to_string(),
            });
        }
        chain.push(node);
    }

    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relation::build;

    const EXAMPLE: [&str; 13] = [
        "COM)B", "B)C", "C)D", "D)E", "E)F", "B)G", "G)H", "D)I", "E)J", "J)K", "K)L", "K)YOU",
        "I)SAN",
    ];

    #[test]
    fn example_transfers() {
        let map = build(EXAMPLE.iter()).unwrap();
        assert_eq!(transfers(&map, "YOU", "SAN"), Ok(4));
        assert_eq!(transfers(&map, "SAN", "YOU"), Ok(4));
    }

    #[test]
    fn same_center_needs_no_transfer() {
        let map = build(EXAMPLE.iter()).unwrap();
        assert_eq!(transfers(&map, "L", "YOU"), Ok(0));
        assert_eq!(transfers(&map, "YOU", "YOU"), Ok(0));
    }

    #[test]
    fn orbiting_an_ancestor() {
        let map = build(EXAMPLE.iter()).unwrap();
        // YOU orbits K, E orbits D, and D is three hops up from K
        assert_eq!(transfers(&map, "YOU", "E"), Ok(3));
    }

    #[test]
    fn unknown_object() {
        let map = build(EXAMPLE.iter()).unwrap();
        assert_eq!(
            transfers(&map, "YOU", "COM"),
            Err(OrbitError::UnknownObject {
                id: "COM".to_string()
            })
        );
        assert_eq!(
            transfers(&map, "NOPE", "SAN"),
            Err(OrbitError::UnknownObject {
                id: "NOPE".to_string()
            })
        );
    }

    #[test]
    fn disjoint_trees() {
        let map = build(vec!["COM)A", "SUN)B"]).unwrap();
        assert_eq!(
            transfers(&map, "A", "B"),
            Err(OrbitError::NoCommonAncestor {
                from: "A".to_string(),
                to: "B".to_string(),
            })
        );
    }

    #[test]
    fn cycle_in_chain() {
        let map = build(vec!["A)B", "B)A", "A)C"]).unwrap();
        assert!(matches!(
            transfers(&map, "C", "B"),
            Err(OrbitError::CyclicStructure { .. })
        ));
    }
}
