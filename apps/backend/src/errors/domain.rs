//! Domain-level error type used across services, repos, and adapters.
//!
//! This error type is HTTP- and DB-agnostic. Handlers should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation kinds for malformed caller input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// A supplied card grid is not 5x5 or holds uncomparable values
    MalformedCard,
    /// The drawn-numbers collection holds non-token entries
    InvalidDrawInput,
    /// A request parameter is out of its accepted range
    InvalidParameter,
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Card,
    Event,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(ValidationKind, String),
    /// Unique-card target unreachable within the retry ceiling
    GenerationExhausted(String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::GenerationExhausted(d) => write!(f, "generation exhausted: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(d) => write!(f, "infra error: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn generation_exhausted(detail: impl Into<String>) -> Self {
        Self::GenerationExhausted(detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(detail: impl Into<String>) -> Self {
        Self::Infra(detail.into())
    }
}

// Adapters return DbErr; the repos layer maps to DomainError through this.
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e {
            sea_orm::DbErr::RecordNotFound(d) => {
                DomainError::NotFound(NotFoundKind::Other(d.clone()), d)
            }
            other => DomainError::Infra(format!("db error: {other}")),
        }
    }
}
