//! Walk error types.

use thiserror::Error;
use vet_core::ConstraintKind;

use crate::violation::Violation;

/// Result type for walk operations.
pub type WalkResult<T> = Result<T, WalkError>;

/// Errors that abort a fail-fast walk.
///
/// In continue-on-error mode these conditions become report records
/// instead; only fail-fast walks surface them as errors.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("No checks are registered; the engine is not initialized")]
    EmptyRegistry,

    #[error("No check registered for constraint '{kind}'")]
    UnknownConstraint { kind: ConstraintKind },

    #[error("Type mismatch: {message}")]
    TypeMismatch { message: String },

    #[error("Maximum recursion depth ({limit}) exceeded")]
    RecursionLimit { limit: usize },

    #[error("Constraint violated: {0}")]
    Violation(Violation),
}

impl WalkError {
    pub fn unknown_constraint(kind: ConstraintKind) -> Self {
        Self::UnknownConstraint { kind }
    }

    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::TypeMismatch {
            message: message.into(),
        }
    }

    pub fn recursion_limit(limit: usize) -> Self {
        Self::RecursionLimit { limit }
    }
}

impl From<Violation> for WalkError {
    fn from(violation: Violation) -> Self {
        Self::Violation(violation)
    }
}
