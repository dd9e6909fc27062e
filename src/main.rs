//! find-heavy-dirs: report the largest and most crowded subdirectories.
//!
//! Thin binary entry point. All logic lives in the `heavydirs-core`
//! and `heavydirs-cli` crates.

use clap::Parser;
use heavydirs_cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Diagnostics go to stderr so stdout stays clean for the report.
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    heavydirs_cli::run(&args, &mut out)
}
