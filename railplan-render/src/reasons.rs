//! Reason lookup and the "why is this surface on" summary.

use railplan_types::TraceEntry;
use std::collections::BTreeMap;

/// Code reported for reason ids with no matching trace entry.
pub const UNKNOWN_CODE: &str = "UNKNOWN";

/// Summary for an empty reason list.
pub const NO_TRIGGERING_CHANGES: &str = "no triggering changes";

/// Ranked clauses kept per summary; the rest are dropped.
const MAX_REASON_CLAUSES: usize = 3;

/// Human description for a planner reason code.
#[derive(Debug, Clone)]
pub struct ReasonDescription {
    pub code: &'static str,
    pub description: &'static str,
}

/// Descriptions for the reason codes the planner emits.
pub static REASON_DESCRIPTIONS: &[ReasonDescription] = &[
    // File classification
    ReasonDescription {
        code: "FILE_KIND_RUST_SRC",
        description: "Rust source changed",
    },
    ReasonDescription {
        code: "FILE_KIND_RUST_TEST",
        description: "Rust test changed",
    },
    ReasonDescription {
        code: "FILE_KIND_BENCH",
        description: "benchmark changed",
    },
    ReasonDescription {
        code: "FILE_KIND_BUILD_SCRIPT",
        description: "build script changed",
    },
    ReasonDescription {
        code: "FILE_KIND_CARGO_TOML",
        description: "crate manifest changed",
    },
    ReasonDescription {
        code: "FILE_KIND_CARGO_LOCK",
        description: "lockfile changed",
    },
    ReasonDescription {
        code: "FILE_KIND_DOCS",
        description: "documentation changed",
    },
    ReasonDescription {
        code: "FILE_KIND_CI",
        description: "CI configuration changed",
    },
    ReasonDescription {
        code: "FILE_KIND_INFRA",
        description: "infrastructure file changed",
    },
    ReasonDescription {
        code: "FILE_KIND_UNKNOWN",
        description: "unclassified file changed",
    },
    // Ownership
    ReasonDescription {
        code: "FILE_OWNS_CRATE_DIRECT",
        description: "file belongs to a workspace crate",
    },
    ReasonDescription {
        code: "FILE_UNOWNED",
        description: "file is outside every crate",
    },
    ReasonDescription {
        code: "WORKSPACE_MANIFEST_CHANGED",
        description: "workspace manifest changed",
    },
    // Propagation
    ReasonDescription {
        code: "CRATE_DEPENDS_ON_IMPACTED",
        description: "crate depends on an impacted crate",
    },
    ReasonDescription {
        code: "CRATE_TRANSITIVE_DEPENDENT",
        description: "crate transitively depends on an impacted crate",
    },
    // Surface activation
    ReasonDescription {
        code: "SURFACE_FROM_DIRECT_CRATE",
        description: "directly impacted crate enables surface",
    },
    ReasonDescription {
        code: "SURFACE_FROM_TRANSITIVE_CRATE",
        description: "transitively impacted crate enables surface",
    },
    ReasonDescription {
        code: "SURFACE_FROM_FILE_KIND",
        description: "file kind enables surface",
    },
    ReasonDescription {
        code: "SURFACE_CUSTOM_PATTERN",
        description: "custom surface pattern matched",
    },
    ReasonDescription {
        code: "SURFACE_FORCED",
        description: "surface forced on by configuration",
    },
    ReasonDescription {
        code: UNKNOWN_CODE,
        description: "unresolved trace reference",
    },
];

/// Description for `code`, or the code itself when it has none.
pub fn describe_code(code: &str) -> &str {
    REASON_DESCRIPTIONS
        .iter()
        .find(|d| d.code == code)
        .map(|d| d.description)
        .unwrap_or(code)
}

/// Trace entries by id. Entries without an id are not indexed; when ids
/// repeat, the later entry wins.
#[derive(Debug, Clone, Default)]
pub struct ReasonIndex<'a> {
    by_id: BTreeMap<i64, &'a TraceEntry>,
}

impl<'a> ReasonIndex<'a> {
    pub fn build(trace: &'a [TraceEntry]) -> Self {
        let mut by_id = BTreeMap::new();
        for entry in trace {
            if let Some(id) = entry.id {
                by_id.insert(id, entry);
            }
        }
        Self { by_id }
    }

    pub fn get(&self, id: i64) -> Option<&'a TraceEntry> {
        self.by_id.get(&id).copied()
    }

    /// Reason code for `id`; [`UNKNOWN_CODE`] when unresolved or blank.
    pub fn code_for(&self, id: i64) -> &'a str {
        self.get(id)
            .map(|e| e.code.as_str())
            .filter(|c| !c.is_empty())
            .unwrap_or(UNKNOWN_CODE)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// One line explaining a surface's reasons.
///
/// Codes are ranked by how many reasons carry them, most first; equal counts
/// keep the order in which the codes first appear. Only the top three are
/// kept, joined with `"; "`.
pub fn summarize_reasons(reasons: &[i64], index: &ReasonIndex<'_>) -> String {
    if reasons.is_empty() {
        return NO_TRIGGERING_CHANGES.to_string();
    }

    let mut tally: Vec<(&str, usize)> = Vec::new();
    for &id in reasons {
        let code = index.code_for(id);
        match tally.iter_mut().find(|(c, _)| *c == code) {
            Some((_, count)) => *count += 1,
            None => tally.push((code, 1)),
        }
    }

    // sort_by is stable, so ties stay in first-seen order.
    tally.sort_by(|a, b| b.1.cmp(&a.1));

    tally
        .iter()
        .take(MAX_REASON_CLAUSES)
        .map(|(code, count)| {
            let description = describe_code(code);
            if *count == 1 {
                description.to_string()
            } else {
                format!("{description} ({count}x)")
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}
