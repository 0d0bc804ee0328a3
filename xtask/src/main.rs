use anyhow::Context;
use clap::{Parser, Subcommand};
use fs_err as fs;
use std::path::Path;
use std::process::Command as ProcessCommand;

const FIXTURES_DIR: &str = "railplan-render/tests/fixtures";

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Workspace helper tasks")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the step output keys in emission order.
    PrintOutputKeys,
    /// Print the reason code table used by the job summary.
    PrintReasonCodes,
    /// Scaffold a golden fixture directory with an empty plan.
    InitFixture { name: String },
    /// Bless golden fixtures (overwrite expected outputs).
    BlessFixtures,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::PrintOutputKeys => {
            for key in railplan_projection::OUTPUT_KEYS {
                println!("{key}");
            }
        }
        Command::PrintReasonCodes => {
            for entry in railplan_render::reasons::REASON_DESCRIPTIONS {
                println!("{}\t{}", entry.code, entry.description);
            }
        }
        Command::InitFixture { name } => {
            let dir = Path::new(FIXTURES_DIR).join(&name);
            if dir.exists() {
                anyhow::bail!("fixture {} already exists", dir.display());
            }
            fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
            fs::write(dir.join("plan.json"), "{}\n")?;
            fs::write(dir.join("summary.md"), "")?;
            fs::write(dir.join("outputs.txt"), "")?;
            println!(
                "initialized {}; edit plan.json then run `cargo xtask bless-fixtures`",
                dir.display()
            );
        }
        Command::BlessFixtures => {
            let status = ProcessCommand::new("cargo")
                .args(["test", "-p", "railplan-render", "--test", "golden_fixtures"])
                .env("RAILPLAN_BLESS", "1")
                .status()
                .context("run golden fixture blessing")?;
            if !status.success() {
                anyhow::bail!("bless-fixtures failed");
            }
        }
    }
    Ok(())
}
