#![no_main]

//! Fuzz target for plan loading and output projection.
//!
//! Arbitrary text goes through the inline loader; every document that loads
//! must project into exactly nine single-line outputs.

use libfuzzer_sys::fuzz_target;
use railplan_load::{PlanSource, load_plan};
use railplan_projection::{OUTPUT_KEYS, build_projection, render_kv_lines};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    let Ok(plan) = load_plan(&PlanSource::Inline(s.to_string())) else {
        return;
    };

    let projection = build_projection(&plan);
    let lines = render_kv_lines(&projection);
    assert_eq!(lines.matches('\n').count(), OUTPUT_KEYS.len());
    assert!(!lines.contains('\r'));

    for key in ["files", "surfaces", "trace", "matrix", "active_surfaces"] {
        let value = projection.get(key).expect("known key");
        assert!(serde_json::from_str::<serde_json::Value>(value).is_ok());
    }
});
