//! Rendering helpers (markdown) for the human-readable plan summary.

pub mod reasons;
pub mod surfaces;
mod summary;

pub use reasons::{NO_TRIGGERING_CHANGES, ReasonIndex, UNKNOWN_CODE, describe_code, summarize_reasons};
pub use surfaces::{SurfacePartition, partition_surfaces};
pub use summary::{SummaryContext, install_label, render_summary_md};
