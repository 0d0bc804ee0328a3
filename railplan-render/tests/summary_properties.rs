//! Property and scenario tests for reason summaries and the rendered report.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use railplan_render::{
    NO_TRIGGERING_CHANGES, ReasonIndex, SummaryContext, render_summary_md, summarize_reasons,
};
use railplan_types::{PlanDocument, TraceEntry};
use serde_json::json;

fn doc(v: serde_json::Value) -> PlanDocument {
    PlanDocument::from_value(v).expect("object root")
}

/// Trace entries with ids 0..n and codes drawn from a small alphabet.
fn arb_trace() -> impl Strategy<Value = Vec<TraceEntry>> {
    prop::collection::vec(prop::sample::select(vec!["A", "B", "C", "D", "E", "F"]), 1..8)
        .prop_map(|codes| {
            codes
                .into_iter()
                .enumerate()
                .map(|(i, code)| TraceEntry {
                    id: Some(i as i64),
                    code: code.to_string(),
                    ..Default::default()
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn never_more_than_three_clauses(
        trace in arb_trace(),
        reasons in prop::collection::vec(0i64..12, 0..40),
    ) {
        let index = ReasonIndex::build(&trace);
        let summary = summarize_reasons(&reasons, &index);
        prop_assert!(summary.split("; ").count() <= 3);
    }

    #[test]
    fn counts_never_increase_along_the_ranking(
        trace in arb_trace(),
        reasons in prop::collection::vec(0i64..8, 1..40),
    ) {
        let index = ReasonIndex::build(&trace);
        let summary = summarize_reasons(&reasons, &index);
        let counts: Vec<usize> = summary
            .split("; ")
            .map(|clause| {
                clause
                    .rsplit_once(" (")
                    .and_then(|(_, n)| n.strip_suffix("x)"))
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(1)
            })
            .collect();
        prop_assert!(counts.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn equal_counts_keep_first_seen_order(perm in Just(vec![0i64, 1, 2]).prop_shuffle()) {
        let trace: Vec<TraceEntry> = ["X", "Y", "Z"]
            .iter()
            .enumerate()
            .map(|(i, code)| TraceEntry {
                id: Some(i as i64),
                code: code.to_string(),
                ..Default::default()
            })
            .collect();
        let index = ReasonIndex::build(&trace);
        let expected: Vec<&str> = perm.iter().map(|&i| trace[i as usize].code.as_str()).collect();
        prop_assert_eq!(summarize_reasons(&perm, &index), expected.join("; "));
    }
}

#[test]
fn scenario_build_reason_ranks_rust_source_first() {
    let plan = doc(json!({
        "files": [{ "path": "a.rs" }],
        "impact": { "direct": ["pkg_a"], "transitive": ["pkg_b", "pkg_a"] },
        "surfaces": { "build": { "enabled": true, "reasons": [1, 1, 2] } },
        "trace": [
            { "id": 1, "code": "FILE_KIND_RUST_SRC" },
            { "id": 2, "code": "FILE_OWNS_CRATE_DIRECT" }
        ]
    }));
    let md = render_summary_md(&plan, &SummaryContext::default());
    assert!(md.contains(
        "| `build` | on | Rust source changed (2x); file belongs to a workspace crate |"
    ));
    assert!(md.contains("| **Active surfaces** | build |"));
    assert!(md.contains("| **Install** | Unknown |"));
}

#[test]
fn scenario_empty_document() {
    let md = render_summary_md(&doc(json!({})), &SummaryContext::default());
    assert!(md.contains("| **Active surfaces** | none |"));
    for name in ["build", "test", "bench", "docs", "infra"] {
        let row = format!("| `{name}` | off | {NO_TRIGGERING_CHANGES} |");
        assert!(md.contains(&row), "missing row for {name}");
    }
    assert!(!md.contains("### Custom surfaces"));
    assert!(!md.contains("**Direct packages:**"));
}

#[test]
fn scenario_disabled_custom_surface_only_in_custom_table() {
    let md = render_summary_md(
        &doc(json!({ "surfaces": { "custom:lint": { "enabled": false, "reasons": [] } } })),
        &SummaryContext::default(),
    );
    let (builtin, custom) = md.split_once("### Custom surfaces").expect("custom table");
    assert!(!builtin.contains("custom:lint"));
    assert!(custom.contains("| `custom:lint` | off | no matching changes |"));
    assert!(md.contains("| **Active surfaces** | none |"));
}

#[test]
fn unlisted_surface_is_active_but_not_tabled() {
    let md = render_summary_md(
        &doc(json!({ "surfaces": { "fuzz": { "enabled": true, "reasons": [] } } })),
        &SummaryContext::default(),
    );
    assert!(md.contains("| **Active surfaces** | fuzz |"));
    assert!(!md.contains("| `fuzz` |"));
}

#[test]
fn report_has_no_trailing_newline() {
    let md = render_summary_md(&PlanDocument::empty(), &SummaryContext::default());
    assert!(md.starts_with("## cargo-rail plan\n"));
    assert!(md.ends_with("</details>"));
}
