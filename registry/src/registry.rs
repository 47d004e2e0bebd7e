//! The CheckRegistry - dispatch from constraint kinds to checks.

use crate::Check;
use std::collections::HashMap;
use std::fmt;
use vet_core::ConstraintKind;

/// Maps each constraint kind to the check implementing it.
///
/// The registry is owned by the caller and passed to the walker by
/// reference; there is no hidden global instance. The expected lifecycle
/// is: populate during initialization, then treat as read-only. Shared
/// references may serve concurrent walks once population is done.
#[derive(Default)]
pub struct CheckRegistry {
    checks: HashMap<ConstraintKind, Box<dyn Check>>,
}

impl CheckRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a check for a kind, replacing any prior entry.
    ///
    /// Last registration wins; replacing is not an error.
    pub fn register(&mut self, kind: ConstraintKind, check: Box<dyn Check>) {
        self.checks.insert(kind, check);
    }

    /// Look up the check for a kind.
    pub fn lookup(&self, kind: ConstraintKind) -> Option<&dyn Check> {
        self.checks.get(&kind).map(|check| check.as_ref())
    }

    /// Returns true if no checks were ever registered.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// The number of registered kinds.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns true if a check is registered for the kind.
    pub fn contains(&self, kind: ConstraintKind) -> bool {
        self.checks.contains_key(&kind)
    }

    /// Registered kinds, in no particular order.
    pub fn kinds(&self) -> impl Iterator<Item = ConstraintKind> + '_ {
        self.checks.keys().copied()
    }
}

impl fmt::Debug for CheckRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&'static str> = self.checks.keys().map(|kind| kind.name()).collect();
        kinds.sort_unstable();
        f.debug_struct("CheckRegistry").field("kinds", &kinds).finish()
    }
}
