#![forbid(unsafe_code)]
mod cli;
mod copy;
mod pattern;
mod prune;
mod run;
mod walk;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use cli::Args;
use pattern::NamePattern;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = parse_args();
    init_logging(&args);

    if let Err(e) = run_app(&args) {
        eprintln!("globcopy: {e:#}");
        std::process::exit(1);
    }
}

/// Parse arguments, remapping clap's usage errors (missing positionals,
/// unknown flags) to exit status 1. Help and version still exit 0.
fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args.validated(),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            std::process::exit(0);
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    }
}

/// Install the operator-facing log sink on stderr. RUST_LOG wins; otherwise
/// the level comes from --verbose/--quiet.
fn init_logging(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_app(args: &Args) -> Result<()> {
    let pattern = NamePattern::new(&args.pattern)?;
    let summary = run::run(&pattern, &args.source, &args.dest, args.follow_symlinks)?;
    tracing::info!(
        "done: {} files matched, {} empty directories pruned",
        summary.matched,
        summary.pruned
    );
    Ok(())
}
