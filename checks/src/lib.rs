//! Vet Checks
//!
//! The built-in checks, one per constraint kind that validates a value.
//!
//! Responsibilities:
//! - Implement the seven built-in value rules
//! - Register them all in one idempotent call

mod numeric;
mod reference;
mod text;

pub use numeric::{
    GreaterThanCheck, GreaterThanOrEqualCheck, LessThanCheck, LessThanOrEqualCheck,
    NotNegativeCheck,
};
pub use reference::NotNullCheck;
pub use text::NotEmptyCheck;

use vet_core::ConstraintKind;
use vet_registry::CheckRegistry;

/// Register all built-in checks, replacing any prior entries for their
/// kinds. Idempotent. `RecurseInto` is a walker directive and has no
/// check to register.
pub fn register_builtin_checks(registry: &mut CheckRegistry) {
    registry.register(ConstraintKind::NotNull, Box::new(NotNullCheck));
    registry.register(ConstraintKind::NotEmpty, Box::new(NotEmptyCheck));
    registry.register(ConstraintKind::GreaterThan, Box::new(GreaterThanCheck));
    registry.register(
        ConstraintKind::GreaterThanOrEqual,
        Box::new(GreaterThanOrEqualCheck),
    );
    registry.register(ConstraintKind::LessThan, Box::new(LessThanCheck));
    registry.register(
        ConstraintKind::LessThanOrEqual,
        Box::new(LessThanOrEqualCheck),
    );
    registry.register(ConstraintKind::NotNegative, Box::new(NotNegativeCheck));
}

/// A registry pre-populated with all built-in checks.
pub fn builtin_registry() -> CheckRegistry {
    let mut registry = CheckRegistry::new();
    register_builtin_checks(&mut registry);
    registry
}
