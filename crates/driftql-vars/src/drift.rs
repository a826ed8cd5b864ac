//! Drift maps: duplicate → original lookups, and their reconciliation
//! across query branches.

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::VarError;
use crate::term::LogicVar;
use crate::unique::EqualityMap;

/// Duplicate identifier → the original it must be unified with.
/// Originals never appear as keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriftMap {
    entries: BTreeMap<LogicVar, LogicVar>,
}

impl DriftMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, duplicate: &LogicVar) -> Option<&LogicVar> {
        self.entries.get(duplicate)
    }

    pub fn contains(&self, var: &LogicVar) -> bool {
        self.entries.contains_key(var)
    }

    pub fn keys(&self) -> impl Iterator<Item = &LogicVar> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LogicVar, &LogicVar)> {
        self.entries.iter()
    }

    /// The original behind `var`, or `var` itself when it is not a duplicate.
    pub fn resolve<'a>(&'a self, var: &'a LogicVar) -> &'a LogicVar {
        self.entries.get(var).unwrap_or(var)
    }
}

impl FromIterator<(LogicVar, LogicVar)> for DriftMap {
    fn from_iter<I: IntoIterator<Item = (LogicVar, LogicVar)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

pub fn build_drift_map(equalities: &EqualityMap) -> DriftMap {
    equalities
        .equality_pairs()
        .map(|(original, dup)| (dup.clone(), original.clone()))
        .collect()
}

/// Duplicates common to every branch, each mapped to itself.
///
/// Only key membership decides the result. A duplicate that drifts to
/// different originals in two branches breaks the uniquing contract and is
/// reported as [`VarError::InconsistentDrift`].
pub fn intersect_drift_maps<'a, I>(maps: I) -> Result<DriftMap, VarError>
where
    I: IntoIterator<Item = &'a DriftMap>,
{
    let mut maps = maps.into_iter();
    let Some(first) = maps.next() else {
        return Ok(DriftMap::new());
    };

    let mut origins: AHashMap<&LogicVar, &LogicVar> = first.iter().collect();
    let mut common: AHashSet<&LogicVar> = first.keys().collect();
    let mut branches = 1usize;

    for map in maps {
        branches += 1;
        for (dup, original) in map.iter() {
            if let Some(seen) = origins.insert(dup, original) {
                if seen != original {
                    return Err(VarError::InconsistentDrift {
                        duplicate: dup.to_string(),
                        left: seen.to_string(),
                        right: original.to_string(),
                    });
                }
            }
        }
        common.retain(|dup| map.contains(dup));
    }

    tracing::debug!(branches, common = common.len(), "intersected drift maps");

    Ok(common
        .into_iter()
        .map(|dup| (dup.clone(), dup.clone()))
        .collect())
}
