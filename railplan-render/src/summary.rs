use crate::reasons::{NO_TRIGGERING_CHANGES, ReasonIndex, summarize_reasons};
use crate::surfaces::partition_surfaces;
use railplan_types::{PlanDocument, Surface, TraceEntry};
use tracing::debug;

/// Reason shown for a disabled custom surface.
const NO_MATCHING_CHANGES: &str = "no matching changes";

/// Labels for how the planner binary was installed.
static INSTALL_METHODS: &[(&str, &str)] = &[
    ("binary", "Binary download"),
    ("binstall", "cargo-binstall"),
    ("cargo-install", "cargo install (compiled)"),
    ("cached", "Already installed"),
];

/// Facts about the run that are not part of the plan document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryContext {
    pub install_method: String,
    pub install_version: String,
    pub base_ref: String,
}

pub fn install_label(method: &str) -> &'static str {
    INSTALL_METHODS
        .iter()
        .find(|(id, _)| *id == method)
        .map(|(_, label)| *label)
        .unwrap_or("Unknown")
}

/// Render the job summary. Output depends only on the arguments.
pub fn render_summary_md(plan: &PlanDocument, ctx: &SummaryContext) -> String {
    let files = plan.changed_paths();
    let impact = plan.impact();
    let active = plan.active_surfaces();
    let trace = plan.trace();
    let index = ReasonIndex::build(&trace);
    let partition = partition_surfaces(&plan.surfaces());

    debug!(
        files = files.len(),
        trace = trace.len(),
        indexed = index.len(),
        custom = partition.custom.len(),
        "rendering summary"
    );

    let mut lines: Vec<String> = Vec::new();
    lines.push("## cargo-rail plan".to_string());
    lines.push(String::new());
    lines.push("| | |".to_string());
    lines.push("|---|---|".to_string());
    lines.push(format!("| **Version** | `{}` |", ctx.install_version));
    lines.push(format!(
        "| **Install** | {} |",
        install_label(&ctx.install_method)
    ));
    lines.push(format!("| **Base** | `{}` |", ctx.base_ref));
    lines.push(format!("| **Changed files** | {} |", files.len()));
    lines.push(format!(
        "| **Direct packages** | {} |",
        impact.direct_packages.len()
    ));
    lines.push(format!(
        "| **Transitive packages** | {} |",
        impact.transitive_packages.len()
    ));
    let active_cell = if active.is_empty() {
        "none".to_string()
    } else {
        active.join(", ")
    };
    lines.push(format!("| **Active surfaces** | {} |", active_cell));
    lines.push(String::new());

    if !impact.direct_packages.is_empty() {
        lines.push(format!(
            "**Direct packages:** `{}`",
            impact.direct_packages.join(" ")
        ));
    }
    if !impact.transitive_packages.is_empty() {
        lines.push(format!(
            "**Transitive packages:** `{}`",
            impact.transitive_packages.join(" ")
        ));
    }
    if !impact.direct_packages.is_empty() || !impact.transitive_packages.is_empty() {
        lines.push(String::new());
    }

    lines.push("### Surface Status".to_string());
    lines.push(String::new());
    push_table_header(&mut lines);
    for (name, surface) in &partition.builtin {
        lines.push(status_row(name, surface, &index, NO_TRIGGERING_CHANGES));
    }

    if !partition.custom.is_empty() {
        lines.push(String::new());
        lines.push("### Custom surfaces".to_string());
        lines.push(String::new());
        push_table_header(&mut lines);
        for (name, surface) in &partition.custom {
            lines.push(status_row(name, surface, &index, NO_MATCHING_CHANGES));
        }
    }

    lines.push(String::new());
    lines.push(
        "<details><summary>Trace details (file -> package -> surface)</summary>".to_string(),
    );
    lines.push(String::new());
    for entry in &trace {
        lines.push(format!("- {}", trace_tokens(entry).join(" ")));
    }
    lines.push(String::new());
    lines.push("</details>".to_string());

    lines.join("\n")
}

fn push_table_header(lines: &mut Vec<String>) {
    lines.push("| Surface | Status | Reason |".to_string());
    lines.push("|---|---|---|".to_string());
}

fn status_row(name: &str, surface: &Surface, index: &ReasonIndex<'_>, off_reason: &str) -> String {
    let (status, reason) = if surface.enabled {
        ("on", summarize_reasons(&surface.reasons, index))
    } else {
        ("off", off_reason.to_string())
    };
    format!(
        "| `{}` | {} | {} |",
        table_cell(name),
        status,
        table_cell(&reason)
    )
}

/// Surface names and raw reason codes are free text; keep them from
/// splitting the row.
fn table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn trace_tokens(entry: &TraceEntry) -> Vec<String> {
    let mut parts = Vec::new();
    match entry.id {
        Some(id) => parts.push(format!("r{id}")),
        None => parts.push("r?".to_string()),
    }
    if !entry.code.is_empty() {
        parts.push(entry.code.clone());
    }
    if let Some(file) = &entry.file {
        parts.push(format!("file={file}"));
    }
    if let Some(package) = &entry.package {
        parts.push(format!("package={package}"));
    }
    if let Some(depends_on) = &entry.depends_on {
        parts.push(format!("depends_on={depends_on}"));
    }
    if let Some(surface) = &entry.surface {
        parts.push(format!("surface={surface}"));
    }
    parts
}
