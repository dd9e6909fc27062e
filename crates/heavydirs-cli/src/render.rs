/// Report rendering: aligned tables, JSON and CSV.
///
/// The core hands over two ranked views; everything about presentation
/// (unit scaling, path shortening, column layout) is decided here.
use crate::cli::OutputFormat;
use anyhow::Result;
use heavydirs_core::model::size::{format_count, format_size};
use heavydirs_core::{HeavyDir, HeavyDirsReport};
use serde::Serialize;
use std::io::Write;

/// Paths longer than this are shortened from the left in tables.
const MAX_PATH_CHARS: usize = 80;

const CSV_HEADER: [&str; 5] = ["view", "rank", "path", "size", "files"];

/// Width of the rule printed under each table header.
const RULE_WIDTH: usize = 70;

/// Which ranking a table or CSV row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum View {
    Size,
    Count,
}

/// One CSV record.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    view: View,
    rank: usize,
    path: &'a str,
    size: u64,
    files: u64,
}

/// Write `report` to `out` in the requested format.
///
/// `top_n` is the requested table length and only appears in table titles.
pub fn render<W: Write>(
    report: &HeavyDirsReport,
    format: OutputFormat,
    top_n: usize,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Table => render_table(report, top_n, out),
        OutputFormat::Json => render_json(report, out),
        OutputFormat::Csv => render_csv(report, out),
    }
}

fn render_table<W: Write>(report: &HeavyDirsReport, top_n: usize, out: &mut W) -> Result<()> {
    write_table(
        out,
        &format!("Top {top_n} Largest Subdirectories by Size"),
        &report.by_size,
        View::Size,
    )?;
    write_table(
        out,
        &format!("Top {top_n} Subdirectories by File Count"),
        &report.by_count,
        View::Count,
    )?;
    Ok(())
}

fn write_table<W: Write>(out: &mut W, title: &str, rows: &[HeavyDir], view: View) -> Result<()> {
    writeln!(out, "\n--- {title} ---")?;
    writeln!(out, "{:<15} | {:<50}", "Metric", "Path")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for row in rows {
        let metric = match view {
            View::Size => format_size(row.size),
            View::Count => format!("{} Files", format_count(row.file_count)),
        };
        let path = row.path.to_string_lossy();
        writeln!(out, "{:<15} | {}", metric, shorten_path(&path, MAX_PATH_CHARS))?;
    }
    Ok(())
}

fn render_json<W: Write>(report: &HeavyDirsReport, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

fn render_csv<W: Write>(report: &HeavyDirsReport, out: &mut W) -> Result<()> {
    // The header is written up front so an empty report still carries it.
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    wtr.write_record(CSV_HEADER)?;
    for (view, rows) in [(View::Size, &report.by_size), (View::Count, &report.by_count)] {
        for (i, row) in rows.iter().enumerate() {
            let path = row.path.to_string_lossy();
            wtr.serialize(CsvRow {
                view,
                rank: i + 1,
                path: &path,
                size: row.size,
                files: row.file_count,
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Keep the last `max - 3` characters behind a `...` marker.
pub fn shorten_path(path: &str, max: usize) -> String {
    let len = path.chars().count();
    if len <= max {
        return path.to_string();
    }
    let keep = max.saturating_sub(3);
    let tail: String = path.chars().skip(len - keep).collect();
    format!("...{tail}")
}
