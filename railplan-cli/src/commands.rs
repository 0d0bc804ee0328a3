use crate::settings::{OutputsSettings, SummarySettings};
use anyhow::Context;
use railplan_load::load_plan;
use railplan_projection::{append_kv_lines, build_projection, write_kv_lines};
use railplan_render::render_summary_md;
use std::io::Write;
use tracing::debug;

/// Project the plan and emit the step outputs.
///
/// The plan is loaded in full before anything is written, so a bad input
/// never leaves a partial block in the output file.
pub fn run_outputs<W: Write>(settings: &OutputsSettings, stdout: &mut W) -> anyhow::Result<()> {
    let plan = settings
        .plan
        .require()
        .and_then(|source| load_plan(&source))
        .context("error reading plan json")?;

    let projection = build_projection(&plan);
    debug!(
        packages = %projection.count,
        files = %projection.changed_files_count,
        "projected plan"
    );

    if let Some(path) = &settings.output {
        append_kv_lines(path, &projection)?;
    }
    if settings.prints_to_console() {
        write_kv_lines(stdout, &projection).context("write step outputs to stdout")?;
    }
    Ok(())
}

/// Render the job summary to `stdout`, falling back to the empty plan.
pub fn run_summary<W: Write>(settings: &SummarySettings, stdout: &mut W) -> anyhow::Result<()> {
    let source = settings.plan.or_empty();
    debug!(source = source.label(), "summary input");
    let plan = load_plan(&source).context("error reading plan json")?;

    let md = render_summary_md(&plan, &settings.context);
    writeln!(stdout, "{md}").context("write summary to stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use pretty_assertions::assert_eq;
    use railplan_load::PlanInputs;

    fn inline(json: &str) -> PlanInputs {
        PlanInputs {
            inline: Some(json.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn outputs_print_when_no_file() {
        let settings = OutputsSettings::new(inline(r#"{"impact":{"direct":["b","a"]}}"#), None, false);
        let mut out = Vec::new();
        run_outputs(&settings, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 9);
        assert!(text.contains("\npackages=a b\n"));
        assert!(text.contains("\nbuild_args=-p a -p b\n"));
    }

    #[test]
    fn outputs_fail_without_plan_and_write_nothing() {
        let temp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(temp.path().join("out")).unwrap();
        let settings = OutputsSettings::new(PlanInputs::default(), Some(path.clone()), true);

        let mut out = Vec::new();
        let err = run_outputs(&settings, &mut out).unwrap_err();

        assert!(format!("{err:#}").contains("plan json not provided"));
        assert!(out.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn summary_uses_empty_plan_by_default() {
        let mut out = Vec::new();
        run_summary(&SummarySettings::default(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("| **Active surfaces** | none |"));
        assert!(text.ends_with("</details>\n"));
    }

    #[test]
    fn summary_rejects_malformed_plan() {
        let settings = SummarySettings {
            plan: inline("{oops"),
            ..Default::default()
        };
        let mut out = Vec::new();
        let err = run_summary(&settings, &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("json parse error"));
        assert!(out.is_empty());
    }
}
