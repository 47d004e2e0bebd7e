//! Reference checks.

use vet_core::{Constraint, ContextRef, Field, Value};
use vet_registry::{field_message, Check, CheckFailure, CheckResult};

/// Fails on null values and on handles whose referent is destroyed.
///
/// A handle can be non-null as a reference while the host has already
/// destroyed its referent; such stale handles violate the constraint
/// just like plain null, with a message naming the difference.
pub struct NotNullCheck;

impl Check for NotNullCheck {
    fn check(
        &self,
        owner_type: &str,
        field: &Field<'_>,
        _constraint: &Constraint,
        _context: Option<&ContextRef>,
    ) -> CheckResult {
        match field.value {
            Value::Null => Err(CheckFailure::invalid(field_message(
                owner_type,
                field.name,
                "is missing a reference.",
            ))),
            Value::Handle(handle) if !handle.is_live() => {
                Err(CheckFailure::invalid(field_message(
                    owner_type,
                    field.name,
                    "references an object that has been destroyed.",
                )))
            }
            _ => Ok(()),
        }
    }
}
