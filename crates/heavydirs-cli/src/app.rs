/// Run one invocation: scan, rank, render.
use crate::cli::{Args, OutputFormat};
use crate::render::render;
use anyhow::Result;
use heavydirs_core::run_scan;
use std::io::Write;
use std::time::Instant;
use tracing::info;

/// Execute the scan described by `args` and write the report to `out`.
///
/// Scan problems never fail the run; they are logged as warnings. The only
/// errors returned here come from writing the output.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let started = Instant::now();
    info!("Starting scan (Ver: {})...", env!("CARGO_PKG_VERSION"));

    let outcome = run_scan(&args.roots(), &args.scan_config());
    if !outcome.diagnostics.is_empty() {
        info!(
            "{} path(s) could not be read and were skipped",
            outcome.diagnostics.len()
        );
    }

    let report = outcome.report(args.top);
    render(&report, args.format, args.top, out)?;

    if args.display_runtime {
        let line = format!(
            "Processed in {:.2} second(s)",
            started.elapsed().as_secs_f64()
        );
        // Keep machine-readable formats parseable.
        match args.format {
            OutputFormat::Table => writeln!(out, "\n{line}")?,
            OutputFormat::Json | OutputFormat::Csv => eprintln!("{line}"),
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;

    fn run_to_string(argv: &[&str]) -> String {
        let args = Args::try_parse_from(argv).unwrap();
        let mut buf = Vec::new();
        run(&args, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_run_renders_table_for_a_real_tree() {
        let tmp = tempfile::TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("media")).unwrap();
        fs::write(tmp.path().join("media/clip"), vec![0u8; 2048]).unwrap();
        let root = tmp.path().to_str().unwrap();

        let out = run_to_string(&["find-heavy-dirs", "--path", root, "--display-runtime"]);
        assert!(out.contains("--- Top 20 Largest Subdirectories by Size ---"));
        assert!(out.contains("2.0 KB"));
        assert!(out.contains("1 Files"));
        assert!(out.contains("Processed in "));
    }

    #[test]
    fn test_run_with_missing_root_still_succeeds() {
        let tmp = tempfile::TempDir::new().unwrap();
        let missing = tmp.path().join("missing");
        let out = run_to_string(&["find-heavy-dirs", missing.to_str().unwrap(), "--format", "csv"]);
        assert_eq!(out, "view,rank,path,size,files\n");
    }
}
