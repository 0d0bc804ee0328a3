//! Clap-free settings for the outputs and summary commands.

use camino::Utf8PathBuf;
use railplan_load::PlanInputs;
use railplan_render::SummaryContext;

/// Step output file provided by the CI runner.
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";
pub const INSTALL_METHOD_ENV: &str = "INSTALL_METHOD";
pub const INSTALL_VERSION_ENV: &str = "INSTALL_VERSION";
pub const BASE_REF_ENV: &str = "BASE_REF";

/// Settings for `railplan outputs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputsSettings {
    pub plan: PlanInputs,
    /// File the key/value lines are appended to.
    pub output: Option<Utf8PathBuf>,
    /// Print to stdout even when `output` is set.
    pub echo_stdout: bool,
}

impl OutputsSettings {
    pub fn new(plan: PlanInputs, output: Option<Utf8PathBuf>, echo_stdout: bool) -> Self {
        Self {
            plan,
            output: output.filter(|p| !p.as_str().is_empty()),
            echo_stdout,
        }
    }

    pub fn prints_to_console(&self) -> bool {
        self.echo_stdout || self.output.is_none()
    }
}

/// Settings for `railplan summary`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummarySettings {
    pub plan: PlanInputs,
    pub context: SummaryContext,
}
