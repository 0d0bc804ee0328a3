//! Plan document ingestion.
//!
//! The planner has already validated the document it emits, so loading only
//! checks that the text is JSON with an object at the root. Field-level shape
//! problems are left to the tolerant accessors in `railplan-types`.

mod load;

pub use load::{PLAN_JSON_ENV, PlanInputs, PlanLoadError, PlanSource, load_plan};
