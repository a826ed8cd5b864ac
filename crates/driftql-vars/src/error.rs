use thiserror::Error;

/// Caller contract violations.
///
/// Classification and sanitization never fail; these errors surface only when
/// a caller hands over data that breaks an invariant of the pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VarError {
    #[error("`{0}` is not a logic variable (expected a `?`, `!` or `!!` prefix)")]
    NotALogicVariable(String),

    #[error("invalid generator base name `{0}`")]
    InvalidBaseName(String),

    #[error("equality group for `{key}` is empty")]
    EmptyEqualityGroup { key: String },

    #[error("equality group for `{key}` must start with `{key}`, found `{first}`")]
    EqualityGroupMismatch { key: String, first: String },

    #[error("`{var}` appears in more than one equality group")]
    SharedEqualityMember { var: String },

    #[error("duplicate `{duplicate}` drifts to `{left}` in one branch and to `{right}` in another")]
    InconsistentDrift {
        duplicate: String,
        left: String,
        right: String,
    },
}
