//! The reflection seam: field descriptors and the Inspect trait.

use crate::{Constraint, Value};

/// Describes one inspectable field on an object instance.
///
/// The value is resolved at descriptor-construction time, so a `Field`
/// is a point-in-time view. Descriptors are produced transiently during
/// a walk and never persisted.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    /// Field name as declared on the host type.
    pub name: &'a str,
    /// Constraints attached to the field declaration.
    pub constraints: &'a [Constraint],
    /// The field's current value.
    pub value: Value<'a>,
}

impl<'a> Field<'a> {
    /// Create a field descriptor.
    pub fn new(name: &'a str, constraints: &'a [Constraint], value: Value<'a>) -> Self {
        Self {
            name,
            constraints,
            value,
        }
    }

    /// Returns true if any constraints are attached.
    pub fn has_constraints(&self) -> bool {
        !self.constraints.is_empty()
    }
}

/// Implemented by host types that expose their fields for validation.
///
/// `fields` must yield descriptors in a stable order (declaration order)
/// so repeated walks of an unchanged object produce identical reports.
pub trait Inspect {
    /// The host type's name, used in violation messages.
    fn type_name(&self) -> &'static str;

    /// Field descriptors in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}
