//! Uniquing of repeated variables.
//!
//! Repeating a join-capable (or plain optional) variable inside one
//! predicate means "these positions are equal". The planner realizes that
//! by giving each repetition its own name and joining on equality later; the
//! [`EqualityMap`] records which names belong together. Repeated ungrounding
//! variables carry no such obligation and keep their name.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::drift::{build_drift_map, DriftMap};
use crate::error::VarError;
use crate::generator::uniquify;
use crate::term::{LogicVar, Term};

/// Original variable → `[original, dup_1, dup_2, ...]`.
///
/// One map is threaded through every predicate of a query and dropped
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<LogicVar, Vec<LogicVar>>",
    into = "BTreeMap<LogicVar, Vec<LogicVar>>"
)]
pub struct EqualityMap {
    groups: BTreeMap<LogicVar, Vec<LogicVar>>,
}

impl EqualityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from explicit groups. Each group must be non-empty, start
    /// with its own key, and share no variable with any other group.
    pub fn from_groups<I>(groups: I) -> Result<Self, VarError>
    where
        I: IntoIterator<Item = (LogicVar, Vec<LogicVar>)>,
    {
        let mut out = BTreeMap::new();
        let mut members = AHashSet::new();
        for (key, group) in groups {
            match group.first() {
                None => {
                    return Err(VarError::EmptyEqualityGroup {
                        key: key.to_string(),
                    })
                }
                Some(first) if *first != key => {
                    return Err(VarError::EqualityGroupMismatch {
                        key: key.to_string(),
                        first: first.to_string(),
                    })
                }
                Some(_) => {}
            }
            if let Some(shared) = group.iter().find(|var| !members.insert((*var).clone())) {
                return Err(VarError::SharedEqualityMember {
                    var: shared.to_string(),
                });
            }
            out.insert(key, group);
        }
        Ok(Self { groups: out })
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, var: &LogicVar) -> Option<&[LogicVar]> {
        self.groups.get(var).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LogicVar, &[LogicVar])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// `(original, duplicate)` for every recorded duplicate.
    pub fn equality_pairs(&self) -> impl Iterator<Item = (&LogicVar, &LogicVar)> {
        self.groups
            .iter()
            .flat_map(|(original, group)| group.iter().skip(1).map(move |dup| (original, dup)))
    }

    pub fn drift_map(&self) -> DriftMap {
        build_drift_map(self)
    }

    /// Rewrite one slot list, renaming repeats in place and recording them.
    pub fn unique_in_place(&mut self, tokens: &[Term]) -> Vec<Term> {
        tokens
            .iter()
            .map(|token| match token.as_logic_var() {
                Some(var) => Term::Var(self.record(var)),
                None => token.clone(),
            })
            .collect()
    }

    fn record(&mut self, var: LogicVar) -> LogicVar {
        let Some(group) = self.groups.get_mut(&var) else {
            self.groups.insert(var.clone(), vec![var.clone()]);
            return var;
        };
        debug_assert!(group.first() == Some(&var), "equality group not headed by its key");

        if var.category().is_groundable() {
            let dup = uniquify(&var);
            tracing::trace!(var = %var, duplicate = %dup, "renamed repeated variable");
            group.push(dup.clone());
            dup
        } else {
            group.last().cloned().unwrap_or(var)
        }
    }
}

impl TryFrom<BTreeMap<LogicVar, Vec<LogicVar>>> for EqualityMap {
    type Error = VarError;

    fn try_from(groups: BTreeMap<LogicVar, Vec<LogicVar>>) -> Result<Self, Self::Error> {
        Self::from_groups(groups)
    }
}

impl From<EqualityMap> for BTreeMap<LogicVar, Vec<LogicVar>> {
    fn from(map: EqualityMap) -> Self {
        map.groups
    }
}

/// Functional form of [`EqualityMap::unique_in_place`].
pub fn unique(tokens: &[Term], mut equalities: EqualityMap) -> (Vec<Term>, EqualityMap) {
    let out = equalities.unique_in_place(tokens);
    (out, equalities)
}

/// Uniquing of a single slot list with a fresh map, returning the drift map
/// directly.
pub fn rename_duplicates(tokens: &[Term]) -> (Vec<Term>, DriftMap) {
    let (out, equalities) = unique(tokens, EqualityMap::new());
    (out, equalities.drift_map())
}
