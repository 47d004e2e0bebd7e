//! Vet Registry
//!
//! Dispatch from constraint kinds to the checks implementing them.
//!
//! Responsibilities:
//! - Define the Check contract and its failure taxonomy
//! - Map each constraint kind to exactly one check (last registration wins)
//! - Expose emptiness so the walker can fail fast on a misconfigured engine

mod check;
mod registry;

pub use check::{field_message, Check, CheckFailure, CheckResult};
pub use registry::CheckRegistry;
