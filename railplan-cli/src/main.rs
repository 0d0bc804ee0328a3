use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use railplan_cli::commands::{run_outputs, run_summary};
use railplan_cli::settings::{
    BASE_REF_ENV, GITHUB_OUTPUT_ENV, INSTALL_METHOD_ENV, INSTALL_VERSION_ENV, OutputsSettings,
    SummarySettings,
};
use railplan_load::PlanInputs;
use railplan_render::SummaryContext;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "railplan",
    version,
    about = "Project cargo-rail impact plans into CI step outputs and job summaries."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Emit the plan's step outputs as key=value lines.
    Outputs(OutputsArgs),
    /// Render the Markdown job summary to stdout.
    Summary(SummaryArgs),
}

/// Plan input; the first one given wins, then PLAN_JSON.
#[derive(Debug, Args)]
struct PlanArgs {
    /// Path to the plan JSON file.
    #[arg(long)]
    plan_json_file: Option<Utf8PathBuf>,

    /// Plan JSON text.
    #[arg(long)]
    plan_json: Option<String>,
}

impl PlanArgs {
    fn into_inputs(self) -> PlanInputs {
        PlanInputs::with_process_env(self.plan_json_file, self.plan_json)
    }
}

#[derive(Debug, Parser)]
struct OutputsArgs {
    #[command(flatten)]
    plan: PlanArgs,

    /// File to append key=value lines to (default: $GITHUB_OUTPUT).
    #[arg(long, env = GITHUB_OUTPUT_ENV)]
    output: Option<Utf8PathBuf>,

    /// Also print the lines to stdout when an output file is set.
    #[arg(long, default_value_t = false)]
    stdout: bool,
}

#[derive(Debug, Parser)]
struct SummaryArgs {
    #[command(flatten)]
    plan: PlanArgs,

    /// How the planner was installed (binary, binstall, cargo-install, cached).
    #[arg(long, env = INSTALL_METHOD_ENV, default_value = "")]
    install_method: String,

    /// Installed planner version.
    #[arg(long, env = INSTALL_VERSION_ENV, default_value = "")]
    install_version: String,

    /// Base ref the change set was computed against.
    #[arg(long, env = BASE_REF_ENV, default_value = "")]
    base_ref: String,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        // Written directly so RUST_LOG cannot filter it out.
        eprintln!("error: {:#}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    // stdout carries the outputs or the report; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Outputs(args) => cmd_outputs(args),
        Command::Summary(args) => cmd_summary(args),
    }
}

fn cmd_outputs(args: OutputsArgs) -> anyhow::Result<()> {
    let settings = OutputsSettings::new(args.plan.into_inputs(), args.output, args.stdout);
    debug!(
        output = ?settings.output,
        echo_stdout = settings.echo_stdout,
        "outputs settings"
    );
    run_outputs(&settings, &mut std::io::stdout().lock())
}

fn cmd_summary(args: SummaryArgs) -> anyhow::Result<()> {
    let settings = SummarySettings {
        plan: args.plan.into_inputs(),
        context: SummaryContext {
            install_method: args.install_method,
            install_version: args.install_version,
            base_ref: args.base_ref,
        },
    };
    debug!(context = ?settings.context, "summary settings");
    run_summary(&settings, &mut std::io::stdout().lock())
}
