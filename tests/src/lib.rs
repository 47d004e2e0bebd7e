//! Vet Tests
//!
//! Integration test framework for the vet engine: shared fixture
//! objects and report assertions used by the scenario files under
//! `tests/`.

pub mod fixtures;

/// Everything a scenario file needs.
pub mod prelude {
    pub use crate::assertion::{assert_report, matches, ReportAssert};
    pub use crate::fixtures::{
        BrokenGauge, Camp, Enemy, PatrolRoute, Potion, Relay, Sign, Spawner, Turret,
    };
    pub use vet_checks::{builtin_registry, register_builtin_checks, NotEmptyCheck, NotNullCheck};
    pub use vet_core::{
        Constraint, ConstraintKind, ContextRef, Field, Inspect, Liveness, Value,
    };
    pub use vet_registry::{field_message, Check, CheckFailure, CheckRegistry, CheckResult};
    pub use vet_runner::{RunControl, RunProgress, RunSummary, Runner, Target};
    pub use vet_walker::{
        Report, Violation, ViolationClass, WalkError, WalkMode, Walker, DEFAULT_MAX_DEPTH,
    };
}
