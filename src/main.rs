//! patchup - Main entry point
//!
//! Parse parameters, validate paths, probe idempotency, apply if needed,
//! report the result.

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use patchup::apply;
use patchup::cli::Cli;
use patchup::params::PatchTask;
use patchup::report::PatchReport;
use patchup::runner::find_patch_bin;

/// Initialize tracing with RUST_LOG override support.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<PatchReport> {
    let task = PatchTask::from_cli(cli)?;
    let patch_bin = find_patch_bin()?;
    debug!(
        "applying {} in {} (dry_run={})",
        task.src.display(),
        task.basedir.display(),
        cli.dry_run
    );

    let outcome = apply::run(&patch_bin, &task, cli.dry_run)?;

    let mut report = PatchReport::from_outcome(outcome);
    if cli.dry_run && report.changed {
        report = report.with_msg("dry run, target left unmodified");
    }
    Ok(report)
}

fn main() {
    init_tracing();
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(report) => {
            if cli.json {
                match report.render_json() {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("patchup: failed to encode report: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                println!("{}", report.render_text());
            }
        }
        Err(e) => {
            eprintln!("patchup: {:#}", e);
            std::process::exit(1);
        }
    }
}
