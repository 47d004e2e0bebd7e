//! The recursive object walker.

use vet_core::{Constraint, ConstraintKind, ContextRef, Field, Inspect, Value};
use vet_registry::{field_message, CheckFailure, CheckRegistry};

use crate::error::{WalkError, WalkResult};
use crate::violation::{Report, Violation, ViolationClass};
use crate::DEFAULT_MAX_DEPTH;

/// How the walker routes failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkMode {
    /// Record every failure as a report entry and keep going.
    ContinueOnError,
    /// Abort the walk on the first failure of any kind.
    FailFast,
}

/// Walks object graphs and applies registered checks to constrained fields.
///
/// The walker borrows a populated registry; it never owns or mutates it.
/// Fields are visited in the order `Inspect::fields` yields them, so
/// repeated walks of an unchanged object produce identical reports.
pub struct Walker<'r> {
    registry: &'r CheckRegistry,
    max_depth: usize,
}

impl<'r> Walker<'r> {
    /// Create a walker over the given registry.
    pub fn new(registry: &'r CheckRegistry) -> Self {
        Self {
            registry,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Replace the recursion depth limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Walk one object graph.
    pub fn walk(&self, root: &dyn Inspect, mode: WalkMode) -> WalkResult<Report> {
        self.walk_inner(root, mode, None)
    }

    /// Walk one object graph, attaching a host context to every record.
    ///
    /// The context is constant across recursive descent: records from
    /// nested objects carry the same context as the root's.
    pub fn walk_with_context(
        &self,
        root: &dyn Inspect,
        mode: WalkMode,
        context: ContextRef,
    ) -> WalkResult<Report> {
        self.walk_inner(root, mode, Some(context))
    }

    fn walk_inner(
        &self,
        root: &dyn Inspect,
        mode: WalkMode,
        context: Option<ContextRef>,
    ) -> WalkResult<Report> {
        let mut report = Report::new();

        // An empty registry is a misconfiguration, not a clean pass.
        if self.registry.is_empty() {
            match mode {
                WalkMode::FailFast => return Err(WalkError::EmptyRegistry),
                WalkMode::ContinueOnError => {
                    report.push(attach(
                        Violation::empty_registry(
                            root.type_name(),
                            "no checks are registered; the engine is not initialized.",
                        ),
                        &context,
                    ));
                    return Ok(report);
                }
            }
        }

        self.walk_object(root, mode, &context, 0, &mut report)?;
        Ok(report)
    }

    fn walk_object(
        &self,
        object: &dyn Inspect,
        mode: WalkMode,
        context: &Option<ContextRef>,
        depth: usize,
        report: &mut Report,
    ) -> WalkResult<()> {
        let owner_type = object.type_name();

        'fields: for field in object.fields() {
            // Descend before the field's own checks, so nested violations
            // precede the owner's in the report.
            if field.constraints.iter().any(Constraint::is_recurse_into) {
                if let Value::Object(nested) = field.value {
                    if depth >= self.max_depth {
                        match mode {
                            WalkMode::FailFast => {
                                return Err(WalkError::recursion_limit(self.max_depth))
                            }
                            WalkMode::ContinueOnError => {
                                report.push(attach(
                                    Violation::new(
                                        ViolationClass::RecursionLimit,
                                        owner_type,
                                        field.name,
                                        ConstraintKind::RecurseInto,
                                        field_message(
                                            owner_type,
                                            field.name,
                                            &format!(
                                                "exceeds the maximum recursion depth ({}).",
                                                self.max_depth
                                            ),
                                        ),
                                    ),
                                    context,
                                ));
                                continue 'fields;
                            }
                        }
                    }
                    self.walk_object(nested, mode, context, depth + 1, report)?;
                }
                // Null and scalar values under RecurseInto are no-ops.
            }

            for constraint in field.constraints {
                // Descent is handled above; the marker never reaches the
                // registry, so it can never be an unknown constraint.
                if constraint.is_recurse_into() {
                    continue;
                }

                let kind = constraint.kind();
                let check = match self.registry.lookup(kind) {
                    Some(check) => check,
                    None => match mode {
                        WalkMode::FailFast => return Err(WalkError::unknown_constraint(kind)),
                        WalkMode::ContinueOnError => {
                            report.push(attach(
                                Violation::new(
                                    ViolationClass::UnknownConstraint,
                                    owner_type,
                                    field.name,
                                    kind,
                                    field_message(
                                        owner_type,
                                        field.name,
                                        &format!(
                                            "carries constraint '{}' but no check is registered for it.",
                                            kind
                                        ),
                                    ),
                                ),
                                context,
                            ));
                            continue;
                        }
                    },
                };

                if let Err(failure) = check.check(owner_type, &field, constraint, context.as_ref())
                {
                    match mode {
                        WalkMode::FailFast => {
                            return Err(fail_fast_error(owner_type, &field, kind, failure, context))
                        }
                        WalkMode::ContinueOnError => {
                            let class = if failure.is_type_mismatch() {
                                ViolationClass::TypeMismatch
                            } else {
                                ViolationClass::Value
                            };
                            let message = failure.message().to_string();
                            report.push(attach(
                                Violation::new(class, owner_type, field.name, kind, message),
                                context,
                            ));
                            // A failed field is not checked further; move
                            // on to the next field.
                            continue 'fields;
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

fn attach(violation: Violation, context: &Option<ContextRef>) -> Violation {
    match context {
        Some(ctx) => violation.with_context(ctx.clone()),
        None => violation,
    }
}

fn fail_fast_error(
    owner_type: &str,
    field: &Field<'_>,
    kind: ConstraintKind,
    failure: CheckFailure,
    context: &Option<ContextRef>,
) -> WalkError {
    match failure {
        CheckFailure::TypeMismatch { message } => WalkError::type_mismatch(message),
        CheckFailure::Invalid { message } => WalkError::Violation(attach(
            Violation::new(ViolationClass::Value, owner_type, field.name, kind, message),
            context,
        )),
    }
}
