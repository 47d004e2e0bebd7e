//! Vet Runner
//!
//! Batch orchestration over many root objects.
//!
//! Responsibilities:
//! - Walk an ordered list of targets with one shared registry
//! - Merge per-object reports into a single summary, in target order
//! - Consult an observer between objects for progress and cancellation
//! - Carry per-target host context into every record of that target

pub mod runner;

pub use runner::{RunControl, RunProgress, RunSummary, Runner, Target};
