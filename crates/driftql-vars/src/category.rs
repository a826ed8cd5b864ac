//! Variable categories and the prefix convention that encodes them.

use serde::{Deserialize, Serialize};

/// Prefix of join-capable (non-nullable) variables.
pub const JOIN_CAPABLE_PREFIX: &str = "?";
/// Prefix of optional (nullable) variables.
pub const OPTIONAL_PREFIX: &str = "!";
/// Prefix of ungrounding variables. Shares its first character with
/// [`OPTIONAL_PREFIX`], so it must be tested first.
pub const UNGROUNDING_PREFIX: &str = "!!";
/// The discard marker.
pub const WILDCARD: &str = "_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarCategory {
    /// Repetition forces an equality join; absence is not tolerated.
    JoinCapable,
    /// May be unbound; repetition does not force a join.
    Optional,
    /// Optional, and the enclosing branch may produce no grounding at all.
    UnGroundable,
}

impl VarCategory {
    pub const fn prefix(self) -> &'static str {
        match self {
            VarCategory::JoinCapable => JOIN_CAPABLE_PREFIX,
            VarCategory::Optional => OPTIONAL_PREFIX,
            VarCategory::UnGroundable => UNGROUNDING_PREFIX,
        }
    }

    /// Category encoded by the prefix of `text`, if any.
    pub fn of(text: &str) -> Option<Self> {
        if text.starts_with(UNGROUNDING_PREFIX) {
            Some(VarCategory::UnGroundable)
        } else if text.starts_with(OPTIONAL_PREFIX) {
            Some(VarCategory::Optional)
        } else if text.starts_with(JOIN_CAPABLE_PREFIX) {
            Some(VarCategory::JoinCapable)
        } else {
            None
        }
    }

    pub const fn is_join_capable(self) -> bool {
        matches!(self, VarCategory::JoinCapable)
    }

    /// True for both plain optional and ungrounding variables.
    pub const fn is_optional(self) -> bool {
        !self.is_join_capable()
    }

    pub const fn is_ungrounding(self) -> bool {
        matches!(self, VarCategory::UnGroundable)
    }

    pub const fn is_groundable(self) -> bool {
        !self.is_ungrounding()
    }
}

/// What a single predicate token is, decided once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "category", rename_all = "snake_case")]
pub enum TokenKind {
    Variable(VarCategory),
    Wildcard,
    Constant,
}

impl TokenKind {
    pub fn of(text: &str) -> Self {
        if text == WILDCARD {
            return TokenKind::Wildcard;
        }
        match VarCategory::of(text) {
            Some(category) => TokenKind::Variable(category),
            None => TokenKind::Constant,
        }
    }

    pub const fn category(self) -> Option<VarCategory> {
        match self {
            TokenKind::Variable(category) => Some(category),
            TokenKind::Wildcard | TokenKind::Constant => None,
        }
    }
}
