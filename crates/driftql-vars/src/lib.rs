//! Variable resolution for driftql predicates.
//!
//! This crate runs between the parser and the dataflow planner. Every
//! variable reference in a predicate is classified by its prefix, rewritten
//! into a canonical [`LogicVar`], and repeated join-capable occurrences are
//! renamed so the planner can turn them into explicit equality joins.
//!
//! Pipeline:
//! - [`sanitize`]: canonicalize variables, expand `_` wildcards
//! - [`unique`]: rename repeated variables inside one slot list, recording an
//!   [`EqualityMap`]
//! - [`build_drift_map`] / [`intersect_drift_maps`]: flatten equality maps and
//!   reconcile them across query branches
//!
//! Variable prefixes:
//! - `?x`  join-capable (repetition forces a join)
//! - `!x`  optional (may be unbound)
//! - `!!x` ungrounding (optional, and the branch may not ground at all)

pub mod category;
pub mod classify;
pub mod drift;
pub mod error;
pub mod generator;
pub mod sanitize;
pub mod term;
pub mod unique;

pub use category::{TokenKind, VarCategory, WILDCARD};
pub use classify::{
    all_groundable, classify_token, extract_canonical_form, is_groundable, is_join_capable,
    is_logic_variable, is_optional, is_ungrounding, is_wildcard, VarToken,
};
pub use drift::{build_drift_map, intersect_drift_maps, DriftMap};
pub use error::VarError;
pub use generator::{
    gen_optional_vars, gen_var, uniquify, GeneratorConfig, SuffixStrategy, VarGenerator,
};
pub use sanitize::{
    any_ungrounding, sanitize, sanitize_predicate, sanitize_predicate_with, wildcard_category,
};
pub use term::{Literal, LogicVar, Term};
pub use unique::{rename_duplicates, unique, EqualityMap};
