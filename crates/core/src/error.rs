//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic contract violations raised by the catalog
/// model (validation, type mismatches). Ingestion/IO concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (non-positive price or quantity, malformed field bag).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Two values of incompatible kinds were combined.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn type_mismatch(msg: impl Into<String>) -> Self {
        Self::TypeMismatch(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch(_))
    }
}
