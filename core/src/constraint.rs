//! Constraint metadata attached to field declarations.
//!
//! A constraint is a declarative rule carried by a field: what must hold
//! for the field's runtime value. Constraints are plain data; the logic
//! implementing them lives behind the `Check` trait in the registry crate.

use std::fmt;

/// A declarative rule attached to a field.
///
/// Numeric bound variants carry the threshold to compare against.
/// `RecurseInto` is a walker directive rather than a value rule: it
/// marks a field whose value should be descended into and validated
/// as its own object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// The value must not be null or reference a destroyed object.
    NotNull,
    /// The value must be a non-empty string.
    NotEmpty,
    /// The value must be strictly greater than the threshold.
    GreaterThan(f64),
    /// The value must be greater than or equal to the threshold.
    GreaterThanOrEqual(f64),
    /// The value must be strictly less than the threshold.
    LessThan(f64),
    /// The value must be less than or equal to the threshold.
    LessThanOrEqual(f64),
    /// The value must not be negative (zero is allowed).
    NotNegative,
    /// Descend into the field's value and validate its fields too.
    RecurseInto,
}

impl Constraint {
    /// The parameter-free kind tag, used as the registry key.
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Constraint::NotNull => ConstraintKind::NotNull,
            Constraint::NotEmpty => ConstraintKind::NotEmpty,
            Constraint::GreaterThan(_) => ConstraintKind::GreaterThan,
            Constraint::GreaterThanOrEqual(_) => ConstraintKind::GreaterThanOrEqual,
            Constraint::LessThan(_) => ConstraintKind::LessThan,
            Constraint::LessThanOrEqual(_) => ConstraintKind::LessThanOrEqual,
            Constraint::NotNegative => ConstraintKind::NotNegative,
            Constraint::RecurseInto => ConstraintKind::RecurseInto,
        }
    }

    /// The numeric threshold for the four bound variants, None otherwise.
    pub fn numeric_param(&self) -> Option<f64> {
        match self {
            Constraint::GreaterThan(v)
            | Constraint::GreaterThanOrEqual(v)
            | Constraint::LessThan(v)
            | Constraint::LessThanOrEqual(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns true if this is the recursive-descent marker.
    pub fn is_recurse_into(&self) -> bool {
        matches!(self, Constraint::RecurseInto)
    }
}

/// Identifies a constraint kind without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    NotNull,
    NotEmpty,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    NotNegative,
    RecurseInto,
}

impl ConstraintKind {
    /// Returns the kind's name.
    pub fn name(&self) -> &'static str {
        match self {
            ConstraintKind::NotNull => "NotNull",
            ConstraintKind::NotEmpty => "NotEmpty",
            ConstraintKind::GreaterThan => "GreaterThan",
            ConstraintKind::GreaterThanOrEqual => "GreaterThanOrEqual",
            ConstraintKind::LessThan => "LessThan",
            ConstraintKind::LessThanOrEqual => "LessThanOrEqual",
            ConstraintKind::NotNegative => "NotNegative",
            ConstraintKind::RecurseInto => "RecurseInto",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
