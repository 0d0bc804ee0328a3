//! Data model for cargo-rail impact plan documents.
//!
//! # Design constraints
//! - The planner owns the schema; this crate only reads it.
//! - Reads are tolerant: a missing or mistyped field yields its default,
//!   never an error. Only a non-object root is rejected.
//! - Views are computed on demand from the retained JSON so raw sections can
//!   still be re-serialised as the planner wrote them.

pub mod access;
pub mod plan;

pub use plan::{
    BUILTIN_SURFACES, CUSTOM_SURFACE_PREFIX, FileChange, ImpactSet, PlanDocument, ShapeError,
    Surface, TraceEntry,
};
