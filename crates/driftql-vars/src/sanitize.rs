//! Predicate sanitization.
//!
//! Rewrites every variable token of a predicate into a canonical
//! [`Term::Var`] and replaces each `_` with a fresh variable. Wildcards in a
//! predicate that already mentions an ungrounding variable become ungrounding
//! themselves, otherwise plain optional.

use crate::category::VarCategory;
use crate::classify::{extract_canonical_form, is_ungrounding};
use crate::error::VarError;
use crate::generator::{GeneratorConfig, VarGenerator};
use crate::term::Term;

pub fn any_ungrounding(predicate: &Term) -> bool {
    match predicate {
        Term::Seq(items) => items.iter().any(any_ungrounding),
        token => is_ungrounding(token),
    }
}

/// Category used for every wildcard replacement in `predicate`.
pub fn wildcard_category(predicate: &Term) -> VarCategory {
    if any_ungrounding(predicate) {
        VarCategory::UnGroundable
    } else {
        VarCategory::Optional
    }
}

/// Rewrite `predicate`, drawing wildcard replacements from `generator`.
pub fn sanitize(predicate: &Term, generator: &VarGenerator) -> Term {
    match predicate {
        Term::Seq(items) => Term::Seq(items.iter().map(|item| sanitize(item, generator)).collect()),
        token => extract_canonical_form(token, generator),
    }
}

pub fn sanitize_predicate(predicate: &Term) -> Term {
    sanitize_logged(predicate, &VarGenerator::new(wildcard_category(predicate)))
}

pub fn sanitize_predicate_with(
    predicate: &Term,
    config: &GeneratorConfig,
) -> Result<Term, VarError> {
    let generator = VarGenerator::with_config(wildcard_category(predicate), config.clone())?;
    Ok(sanitize_logged(predicate, &generator))
}

fn sanitize_logged(predicate: &Term, generator: &VarGenerator) -> Term {
    let out = sanitize(predicate, generator);
    tracing::debug!(
        wildcard_category = ?generator.category(),
        base_name = %generator.config().base_name,
        "sanitized predicate"
    );
    out
}
