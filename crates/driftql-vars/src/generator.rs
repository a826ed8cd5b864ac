//! Collision-free identifier generation.
//!
//! Generated names have the shape `<prefix><base><separator><suffix>`, e.g.
//! `!gen__9f1c...`. Suffixes come either from a v4 UUID (the default) or from
//! a process-wide atomic sequence, so identifiers never repeat within one
//! process, across categories, generator instances and threads.
//!
//! Sequential suffixes are predictable: a source variable spelled `?a__3`
//! can collide with a generated duplicate of `?a`. Use them only when the
//! parser guarantees source names never contain the separator.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

use crate::category::VarCategory;
use crate::error::VarError;
use crate::term::LogicVar;

/// Separates a name from its generated suffix.
pub const SUFFIX_SEPARATOR: &str = "__";

pub const DEFAULT_BASE_NAME: &str = "gen";

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuffixStrategy {
    /// Monotonic process-wide counter. Short, readable names.
    Sequential,
    /// Random v4 UUID; no realistic source name can match it.
    #[default]
    Random,
}

impl SuffixStrategy {
    pub fn next_suffix(self) -> String {
        match self {
            SuffixStrategy::Sequential => {
                let n = SEQUENCE.fetch_add(1, Ordering::Relaxed);
                format!("{SUFFIX_SEPARATOR}{n}")
            }
            SuffixStrategy::Random => format!("{SUFFIX_SEPARATOR}{}", Uuid::new_v4().simple()),
        }
    }
}

/// Configuration for identifier generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Stem placed between the category prefix and the suffix.
    pub base_name: String,
    pub suffix: SuffixStrategy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_name: DEFAULT_BASE_NAME.to_string(),
            suffix: SuffixStrategy::default(),
        }
    }
}

impl GeneratorConfig {
    /// The base name must be non-empty and made of ASCII alphanumerics or `_`.
    /// Anything else could change the category a prefix encodes (`!` + `!x`
    /// reads as ungrounding).
    pub fn validate(&self) -> Result<(), VarError> {
        let ok = !self.base_name.is_empty()
            && self
                .base_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if ok {
            Ok(())
        } else {
            Err(VarError::InvalidBaseName(self.base_name.clone()))
        }
    }
}

/// Generator bound to one category, usually scoped to one predicate.
#[derive(Debug, Clone)]
pub struct VarGenerator {
    category: VarCategory,
    config: GeneratorConfig,
}

impl VarGenerator {
    pub fn new(category: VarCategory) -> Self {
        Self {
            category,
            config: GeneratorConfig::default(),
        }
    }

    pub fn with_config(category: VarCategory, config: GeneratorConfig) -> Result<Self, VarError> {
        config.validate()?;
        Ok(Self { category, config })
    }

    pub fn join_capable() -> Self {
        Self::new(VarCategory::JoinCapable)
    }

    pub fn optional() -> Self {
        Self::new(VarCategory::Optional)
    }

    pub fn ungrounding() -> Self {
        Self::new(VarCategory::UnGroundable)
    }

    pub fn category(&self) -> VarCategory {
        self.category
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn fresh(&self) -> LogicVar {
        let name = format!(
            "{}{}{}",
            self.category.prefix(),
            self.config.base_name,
            self.config.suffix.next_suffix()
        );
        LogicVar::from_parts(name, self.category)
    }

    pub fn fresh_n(&self, n: usize) -> Vec<LogicVar> {
        (0..n).map(|_| self.fresh()).collect()
    }

    /// `var` with a fresh suffix, drawn with this generator's strategy.
    pub fn uniquify(&self, var: &LogicVar) -> LogicVar {
        uniquify_with(var, self.config.suffix)
    }
}

/// A fresh identifier of the given category, with the default configuration.
pub fn gen_var(category: VarCategory) -> LogicVar {
    VarGenerator::new(category).fresh()
}

pub fn gen_optional_vars(n: usize) -> Vec<LogicVar> {
    VarGenerator::optional().fresh_n(n)
}

/// `var` with a fresh suffix appended; the prefix, and so the category, is kept.
pub fn uniquify(var: &LogicVar) -> LogicVar {
    uniquify_with(var, SuffixStrategy::default())
}

fn uniquify_with(var: &LogicVar, strategy: SuffixStrategy) -> LogicVar {
    let name = format!("{}{}", var.name(), strategy.next_suffix());
    LogicVar::from_parts(name, var.category())
}
