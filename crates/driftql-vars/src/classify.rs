//! Token classification.
//!
//! Every check degrades to "constant" for input that has no textual form
//! (numbers, nulls, nested sequences); nothing here fails.

use crate::category::{TokenKind, VarCategory};
use crate::generator::VarGenerator;
use crate::term::{LogicVar, Term};

/// Anything that may carry a variable name.
pub trait VarToken {
    fn token_text(&self) -> Option<&str>;
}

impl VarToken for str {
    fn token_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl VarToken for String {
    fn token_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl VarToken for LogicVar {
    fn token_text(&self) -> Option<&str> {
        Some(self.name())
    }
}

impl VarToken for Term {
    fn token_text(&self) -> Option<&str> {
        Term::token_text(self)
    }
}

impl<T: VarToken + ?Sized> VarToken for &T {
    fn token_text(&self) -> Option<&str> {
        (**self).token_text()
    }
}

pub fn classify_token<T: VarToken + ?Sized>(token: &T) -> TokenKind {
    token.token_text().map_or(TokenKind::Constant, TokenKind::of)
}

fn category_of<T: VarToken + ?Sized>(token: &T) -> Option<VarCategory> {
    classify_token(token).category()
}

pub fn is_join_capable<T: VarToken + ?Sized>(token: &T) -> bool {
    category_of(token).is_some_and(VarCategory::is_join_capable)
}

/// A variable that is not join-capable: plain optional or ungrounding.
pub fn is_optional<T: VarToken + ?Sized>(token: &T) -> bool {
    category_of(token).is_some_and(VarCategory::is_optional)
}

pub fn is_ungrounding<T: VarToken + ?Sized>(token: &T) -> bool {
    category_of(token).is_some_and(VarCategory::is_ungrounding)
}

/// Complement of [`is_ungrounding`]. Constants count as groundable.
pub fn is_groundable<T: VarToken + ?Sized>(token: &T) -> bool {
    !is_ungrounding(token)
}

pub fn all_groundable<I>(tokens: I) -> bool
where
    I: IntoIterator,
    I::Item: VarToken,
{
    tokens.into_iter().all(|token| is_groundable(&token))
}

pub fn is_logic_variable<T: VarToken + ?Sized>(token: &T) -> bool {
    category_of(token).is_some()
}

pub fn is_wildcard<T: VarToken + ?Sized>(token: &T) -> bool {
    classify_token(token) == TokenKind::Wildcard
}

/// Canonical form of a single token.
///
/// Raw variable tokens become [`Term::Var`]; the wildcard becomes a fresh
/// variable drawn from `generator`; anything else is returned as is.
pub fn extract_canonical_form(token: &Term, generator: &VarGenerator) -> Term {
    match classify_token(token) {
        TokenKind::Wildcard => Term::Var(generator.fresh()),
        TokenKind::Variable(_) => token.as_logic_var().map_or_else(|| token.clone(), Term::Var),
        TokenKind::Constant => token.clone(),
    }
}
