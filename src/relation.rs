use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::iter::successors;
use std::str::FromStr;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::error::{OrbitError, Result};

pub const SEPARATOR: char = ')';

/// One `CENTER)ORBITER` line of a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub parent: String,
    pub child: String,
}

impl FromStr for Record {
    type Err = OrbitError;

    fn from_str(line: &str) -> Result<Self> {
        let malformed = || OrbitError::MalformedRecord {
            line: line.to_string(),
        };

        if line.trim().is_empty() {
            return Err(malformed());
        }

        let (parent, child): (&str, &str) = line
            .split(SEPARATOR)
            .collect_tuple()
            .ok_or_else(malformed)?;

        if parent.is_empty() || child.is_empty() {
            return Err(malformed());
        }

        Ok(Record {
            parent: parent.to_string(),
            child: child.to_string(),
        })
    }
}

/// Orbiter -> center lookup. Anything that never shows up as an orbiter is a
/// root of its own tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationMap {
    orbits: HashMap<String, String>,
}

impl RelationMap {
    pub fn parent_of(&self, child: &str) -> Option<&str> {
        self.orbits.get(child).map(String::as_str)
    }

    /// The map's own copy of `child`, if it orbits anything.
    pub fn key(&self, child: &str) -> Option<&str> {
        self.orbits
            .get_key_value(child)
            .map(|(key, _)| key.as_str())
    }

    pub fn contains(&self, child: &str) -> bool {
        self.orbits.contains_key(child)
    }

    pub fn len(&self) -> usize {
        self.orbits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orbits.is_empty()
    }

    /// (orbiter, center) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.orbits
            .iter()
            .map(|(child, parent)| (child.as_str(), parent.as_str()))
    }

    /// Walks center links from `node` toward its root, not including `node`.
    ///
    /// The walk never ends on a cyclic map, so bound it (or use
    /// [`crate::depth::depth`]) when the input hasn't been checked.
    pub fn ancestors<'a>(&'a self, node: &str) -> impl Iterator<Item = &'a str> + 'a {
        successors(self.parent_of(node), move |n| self.parent_of(n))
    }

    /// Centers that don't orbit anything, sorted.
    pub fn roots(&self) -> Vec<&str> {
        self.orbits
            .values()
            .filter(|parent| !self.orbits.contains_key(parent.as_str()))
            .map(String::as_str)
            .unique()
            .sorted()
            .collect()
    }
}

impl FromStr for RelationMap {
    type Err = OrbitError;

    fn from_str(s: &str) -> Result<Self> {
        build(s.lines())
    }
}

/// Builds the orbiter -> center map, failing on the first bad line or on an
/// orbiter that already has a center.
pub fn build<I, S>(lines: I) -> Result<RelationMap>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut orbits: HashMap<String, String> = HashMap::new();

    for line in lines {
        let Record { parent, child } = line.as_ref().parse()?;

        match orbits.entry(child) {
            Entry::Occupied(entry) => {
                return Err(OrbitError::DuplicateChild {
                    child: entry.key().clone(),
                    existing: entry.get().clone(),
                    attempted: parent,
                });
            }
            Entry::Vacant(entry) => {
                trace!(center = %parent, orbiter = %entry.key(), "recorded orbit");
                entry.insert(parent);
            }
        }
    }

    debug!(orbiters = orbits.len(), "built relation map");

    Ok(RelationMap { orbits })
}
