#![no_main]

//! Fuzz target for the job summary renderer.
//!
//! Any JSON object must render without panicking, and rendering is
//! deterministic for a given document.

use libfuzzer_sys::fuzz_target;
use railplan_render::{SummaryContext, render_summary_md};
use railplan_types::PlanDocument;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let Ok(plan) = PlanDocument::from_value(value) else {
        return;
    };

    let ctx = SummaryContext::default();
    let first = render_summary_md(&plan, &ctx);
    assert_eq!(first, render_summary_md(&plan, &ctx));
    assert!(first.starts_with("## cargo-rail plan"));
});
