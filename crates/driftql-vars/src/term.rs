//! Predicate structures as handed over by the parser.
//!
//! A predicate is a tree over a small closed set of node kinds: nested
//! sequences, raw tokens (symbols and strings, which may name variables),
//! canonical variables, and scalar literals.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::category::VarCategory;
use crate::error::VarError;

/// A canonical logic variable.
///
/// The category is derived from the name's prefix when the variable is
/// built and never re-parsed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogicVar {
    name: String,
    category: VarCategory,
}

impl LogicVar {
    pub fn parse(text: &str) -> Result<Self, VarError> {
        Self::from_text(text).ok_or_else(|| VarError::NotALogicVariable(text.to_string()))
    }

    /// `None` when `text` carries no reserved prefix.
    pub fn from_text(text: &str) -> Option<Self> {
        let category = VarCategory::of(text)?;
        Some(Self {
            name: text.to_string(),
            category,
        })
    }

    /// Callers guarantee that `name` starts with `category.prefix()`.
    pub(crate) fn from_parts(name: String, category: VarCategory) -> Self {
        debug_assert_eq!(VarCategory::of(&name), Some(category));
        Self { name, category }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> VarCategory {
        self.category
    }
}

impl fmt::Display for LogicVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for LogicVar {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl TryFrom<String> for LogicVar {
    type Error = VarError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        match VarCategory::of(&name) {
            Some(category) => Ok(Self { name, category }),
            None => Err(VarError::NotALogicVariable(name)),
        }
    }
}

impl From<LogicVar> for String {
    fn from(var: LogicVar) -> Self {
        var.name
    }
}

/// Scalar constants embedded in predicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Term {
    Seq(Vec<Term>),
    /// A bare symbol from the source, e.g. `?x`, `_` or an operator name.
    Symbol(String),
    /// A string from the source; `"?x"` names a variable just like `?x`.
    Str(String),
    Var(LogicVar),
    Literal(Literal),
}

impl Term {
    pub fn symbol(text: impl Into<String>) -> Self {
        Term::Symbol(text.into())
    }

    pub fn string(text: impl Into<String>) -> Self {
        Term::Str(text.into())
    }

    pub fn int(value: i64) -> Self {
        Term::Literal(Literal::Int(value))
    }

    pub fn seq(items: impl IntoIterator<Item = Term>) -> Self {
        Term::Seq(items.into_iter().collect())
    }

    /// Textual form of token-like nodes; `None` for literals and sequences.
    pub fn token_text(&self) -> Option<&str> {
        match self {
            Term::Symbol(text) | Term::Str(text) => Some(text),
            Term::Var(var) => Some(var.name()),
            Term::Seq(_) | Term::Literal(_) => None,
        }
    }

    /// The variable this node refers to, whether already canonical or still a
    /// raw token.
    pub fn as_logic_var(&self) -> Option<LogicVar> {
        match self {
            Term::Var(var) => Some(var.clone()),
            Term::Symbol(text) | Term::Str(text) => LogicVar::from_text(text),
            Term::Seq(_) | Term::Literal(_) => None,
        }
    }

    /// Every variable occurrence in the structure, depth-first, left to right.
    pub fn logic_vars(&self) -> Vec<LogicVar> {
        let mut out = Vec::new();
        self.collect_vars(&mut out);
        out
    }

    fn collect_vars(&self, out: &mut Vec<LogicVar>) {
        match self {
            Term::Seq(items) => {
                for item in items {
                    item.collect_vars(out);
                }
            }
            other => out.extend(other.as_logic_var()),
        }
    }
}

impl From<LogicVar> for Term {
    fn from(var: LogicVar) -> Self {
        Term::Var(var)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}
