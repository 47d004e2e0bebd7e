//! String checks.

use vet_core::{Constraint, ContextRef, Field};
use vet_registry::{field_message, Check, CheckFailure, CheckResult};

/// Fails on null, non-string, and empty-string values, in that order.
///
/// Null and empty are data problems; a non-string value means the
/// constraint was attached to the wrong field and is a type mismatch.
pub struct NotEmptyCheck;

impl Check for NotEmptyCheck {
    fn check(
        &self,
        owner_type: &str,
        field: &Field<'_>,
        _constraint: &Constraint,
        _context: Option<&ContextRef>,
    ) -> CheckResult {
        if field.value.is_null() {
            return Err(CheckFailure::invalid(field_message(
                owner_type,
                field.name,
                "must not be null.",
            )));
        }

        let text = field.value.as_str().ok_or_else(|| {
            CheckFailure::type_mismatch(field_message(owner_type, field.name, "is not a string."))
        })?;

        if text.is_empty() {
            return Err(CheckFailure::invalid(field_message(
                owner_type,
                field.name,
                "must not be empty.",
            )));
        }

        Ok(())
    }
}
