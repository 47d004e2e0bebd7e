//! Numeric bound checks.
//!
//! Bounds are compared through `partial_cmp`, so an unordered comparison
//! (a NaN value) satisfies no bound and every bound constraint reports
//! NaN as a violation. `NotNegativeCheck` tests `value < 0.0` directly,
//! which NaN passes.

use std::cmp::Ordering;

use vet_core::{Constraint, ContextRef, Field};
use vet_registry::{field_message, Check, CheckFailure, CheckResult};

/// Numeric view of the field value, or a type mismatch naming the rule.
fn numeric_value(
    owner_type: &str,
    field: &Field<'_>,
    requirement: &str,
) -> Result<f64, CheckFailure> {
    field.value.as_number().ok_or_else(|| {
        CheckFailure::type_mismatch(field_message(
            owner_type,
            field.name,
            &format!(
                "is required to {} but its type cannot be compared to numbers.",
                requirement
            ),
        ))
    })
}

/// The constraint's bound, or a type mismatch if the variant has none.
fn bound_param(
    owner_type: &str,
    field: &Field<'_>,
    constraint: &Constraint,
) -> Result<f64, CheckFailure> {
    constraint.numeric_param().ok_or_else(|| {
        CheckFailure::type_mismatch(field_message(
            owner_type,
            field.name,
            "is bound-checked but the constraint carries no numeric limit.",
        ))
    })
}

/// The value must be strictly greater than the constraint's bound.
pub struct GreaterThanCheck;

impl Check for GreaterThanCheck {
    fn check(
        &self,
        owner_type: &str,
        field: &Field<'_>,
        constraint: &Constraint,
        _context: Option<&ContextRef>,
    ) -> CheckResult {
        let value = numeric_value(owner_type, field, "be greater than a given value")?;
        let limit = bound_param(owner_type, field, constraint)?;
        if !matches!(value.partial_cmp(&limit), Some(Ordering::Greater)) {
            return Err(CheckFailure::invalid(field_message(
                owner_type,
                field.name,
                &format!("must be greater than {}.", limit),
            )));
        }
        Ok(())
    }
}

/// The value must be greater than or equal to the constraint's bound.
pub struct GreaterThanOrEqualCheck;

impl Check for GreaterThanOrEqualCheck {
    fn check(
        &self,
        owner_type: &str,
        field: &Field<'_>,
        constraint: &Constraint,
        _context: Option<&ContextRef>,
    ) -> CheckResult {
        let value = numeric_value(owner_type, field, "be greater than or equal to a given value")?;
        let limit = bound_param(owner_type, field, constraint)?;
        if !matches!(
            value.partial_cmp(&limit),
            Some(Ordering::Greater | Ordering::Equal)
        ) {
            return Err(CheckFailure::invalid(field_message(
                owner_type,
                field.name,
                &format!("must be greater than or equal to {}.", limit),
            )));
        }
        Ok(())
    }
}

/// The value must be strictly less than the constraint's bound.
pub struct LessThanCheck;

impl Check for LessThanCheck {
    fn check(
        &self,
        owner_type: &str,
        field: &Field<'_>,
        constraint: &Constraint,
        _context: Option<&ContextRef>,
    ) -> CheckResult {
        let value = numeric_value(owner_type, field, "be less than a given value")?;
        let limit = bound_param(owner_type, field, constraint)?;
        if !matches!(value.partial_cmp(&limit), Some(Ordering::Less)) {
            return Err(CheckFailure::invalid(field_message(
                owner_type,
                field.name,
                &format!("must be less than {}.", limit),
            )));
        }
        Ok(())
    }
}

/// The value must be less than or equal to the constraint's bound.
pub struct LessThanOrEqualCheck;

impl Check for LessThanOrEqualCheck {
    fn check(
        &self,
        owner_type: &str,
        field: &Field<'_>,
        constraint: &Constraint,
        _context: Option<&ContextRef>,
    ) -> CheckResult {
        let value = numeric_value(owner_type, field, "be less than or equal to a given value")?;
        let limit = bound_param(owner_type, field, constraint)?;
        if !matches!(
            value.partial_cmp(&limit),
            Some(Ordering::Less | Ordering::Equal)
        ) {
            return Err(CheckFailure::invalid(field_message(
                owner_type,
                field.name,
                &format!("must be less than or equal to {}.", limit),
            )));
        }
        Ok(())
    }
}

/// The value must not be negative; zero is allowed.
pub struct NotNegativeCheck;

impl Check for NotNegativeCheck {
    fn check(
        &self,
        owner_type: &str,
        field: &Field<'_>,
        _constraint: &Constraint,
        _context: Option<&ContextRef>,
    ) -> CheckResult {
        let value = numeric_value(owner_type, field, "be non-negative")?;
        if value < 0.0 {
            return Err(CheckFailure::invalid(field_message(
                owner_type,
                field.name,
                "must not be negative.",
            )));
        }
        Ok(())
    }
}
