//! Violation records and the report collection.

use std::fmt;
use vet_core::{ConstraintKind, ContextRef};

/// Classifies what a violation record represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationClass {
    /// The inspected value fails its constraint - the primary output.
    Value,
    /// A constraint was attached to a field of an incompatible type.
    TypeMismatch,
    /// A constraint kind has no registered check.
    UnknownConstraint,
    /// The registry was empty at walk time.
    EmptyRegistry,
    /// Recursive descent exceeded the depth limit.
    RecursionLimit,
}

impl ViolationClass {
    /// Returns true if this is a data problem.
    pub fn is_value(&self) -> bool {
        matches!(self, ViolationClass::Value)
    }

    /// Returns true if this is an engine problem rather than a data problem.
    pub fn is_engine_error(&self) -> bool {
        !self.is_value()
    }
}

impl fmt::Display for ViolationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ViolationClass::Value => "value violation",
            ViolationClass::TypeMismatch => "type mismatch",
            ViolationClass::UnknownConstraint => "unknown constraint",
            ViolationClass::EmptyRegistry => "empty registry",
            ViolationClass::RecursionLimit => "recursion limit",
        };
        f.write_str(label)
    }
}

/// One violation produced during a walk.
#[derive(Debug, Clone)]
pub struct Violation {
    /// What kind of problem this record represents.
    pub class: ViolationClass,
    /// Name of the type that owns the offending field.
    pub object_type: String,
    /// Offending field name; None only for whole-walk records.
    pub field: Option<String>,
    /// The violated constraint's kind; None only for whole-walk records.
    pub constraint: Option<ConstraintKind>,
    /// Human-readable description of the problem.
    pub message: String,
    /// The walk's host context, if one was provided.
    pub context: Option<ContextRef>,
}

impl Violation {
    /// Create a field-level violation record.
    pub fn new(
        class: ViolationClass,
        object_type: impl Into<String>,
        field: impl Into<String>,
        constraint: ConstraintKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            class,
            object_type: object_type.into(),
            field: Some(field.into()),
            constraint: Some(constraint),
            message: message.into(),
            context: None,
        }
    }

    /// Create the whole-walk record for an empty registry.
    pub fn empty_registry(object_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            class: ViolationClass::EmptyRegistry,
            object_type: object_type.into(),
            field: None,
            constraint: None,
            message: message.into(),
            context: None,
        }
    }

    /// Attach the walk's host context.
    pub fn with_context(mut self, context: ContextRef) -> Self {
        self.context = Some(context);
        self
    }

    /// Returns true if this is a data problem.
    pub fn is_value(&self) -> bool {
        self.class.is_value()
    }

    /// Returns true if this is an engine problem.
    pub fn is_engine_error(&self) -> bool {
        self.class.is_engine_error()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Append-only ordered collection of violations.
#[derive(Debug, Clone, Default)]
pub struct Report {
    violations: Vec<Violation>,
}

impl Report {
    /// Create a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Returns true if the run passed fully.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// The number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// All violations in walk order.
    pub fn all(&self) -> &[Violation] {
        &self.violations
    }

    /// The first violation, if any.
    pub fn first(&self) -> Option<&Violation> {
        self.violations.first()
    }

    /// Iterate over the violations in walk order.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Data-problem records only.
    pub fn value_violations(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.is_value())
    }

    /// Engine-problem records only.
    pub fn engine_errors(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.is_engine_error())
    }

    /// Returns true if any engine-problem records are present.
    pub fn has_engine_errors(&self) -> bool {
        self.violations.iter().any(|v| v.is_engine_error())
    }

    /// Append another report, preserving both orders.
    pub fn merge(&mut self, other: Report) {
        self.violations.extend(other.violations);
    }
}

impl IntoIterator for Report {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
