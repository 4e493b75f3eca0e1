//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Covers deterministic failures on values entering the domain (identifiers,
/// enum spellings). Transport concerns belong to `jobboard-client`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. empty or not path-safe).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A value is not a member of its enumerated set.
    #[error("unknown {kind}: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }
}
