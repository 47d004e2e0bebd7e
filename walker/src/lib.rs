//! Vet Walker
//!
//! Recursive constraint walking over inspectable object graphs.
//!
//! Responsibilities:
//! - Enumerate fields in declaration order and dispatch their constraints
//! - Descend into RecurseInto fields ahead of the owner's own checks
//! - Bound recursion depth
//! - Route failures per walk mode (collect vs abort)

mod error;
mod violation;
mod walker;

pub use error::{WalkError, WalkResult};
pub use violation::{Report, Violation, ViolationClass};
pub use walker::{WalkMode, Walker};

/// Default recursion depth limit for nested objects.
pub const DEFAULT_MAX_DEPTH: usize = 100;
