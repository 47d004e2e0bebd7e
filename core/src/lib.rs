//! Vet Core Types
//!
//! This crate provides the foundational types used throughout the vet engine:
//! - Value snapshots (the Value enum with scalar and borrowed reference forms)
//! - Liveness, the explicit aliveness predicate for host-managed handles
//! - Constraint metadata (Constraint and its ConstraintKind tag)
//! - The reflection seam (Inspect trait and Field descriptors)
//! - Opaque host context (ContextRef)

mod constraint;
mod context;
mod field;
mod value;

pub use constraint::*;
pub use context::*;
pub use field::*;
pub use value::*;
