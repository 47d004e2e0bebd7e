//! The check contract and its failure taxonomy.

use thiserror::Error;
use vet_core::{Constraint, ContextRef, Field};

/// Result type for a single check invocation.
pub type CheckResult = Result<(), CheckFailure>;

/// How a single check fails.
///
/// `Invalid` means the data is wrong; `TypeMismatch` means the
/// constraint cannot apply to the value's type at all, which is an
/// engine-level problem rather than a reportable data problem.
#[derive(Debug, Error)]
pub enum CheckFailure {
    #[error("{message}")]
    Invalid { message: String },

    #[error("{message}")]
    TypeMismatch { message: String },
}

impl CheckFailure {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::TypeMismatch {
            message: message.into(),
        }
    }

    /// The failure message, regardless of variant.
    pub fn message(&self) -> &str {
        match self {
            Self::Invalid { message } | Self::TypeMismatch { message } => message,
        }
    }

    /// Returns true if this is a type-mismatch failure.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}

/// One executable validation rule.
///
/// Checks are registered once per constraint kind and invoked by the
/// walker for every field carrying that kind. Checks read the field's
/// value snapshot and never mutate the object under test. `Send + Sync`
/// so a populated registry can serve concurrent walks by reference.
pub trait Check: Send + Sync {
    /// Validate one field against one constraint.
    ///
    /// `owner_type` is the name of the type declaring the field. The
    /// `context` is the host context of the current walk, if any; the
    /// built-in checks ignore it.
    fn check(
        &self,
        owner_type: &str,
        field: &Field<'_>,
        constraint: &Constraint,
        context: Option<&ContextRef>,
    ) -> CheckResult;
}

/// Compose the standard violation message prefix.
///
/// Every check failure names the field and the owning type the same
/// way: `field '<name>' on '<type>' <detail>`.
pub fn field_message(owner_type: &str, field_name: &str, detail: &str) -> String {
    format!("field '{}' on '{}' {}", field_name, owner_type, detail)
}
