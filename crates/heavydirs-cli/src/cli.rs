/// Command-line arguments.
///
/// clap rejects malformed numbers and unknown flags before any scanning
/// starts, so the core only ever sees a valid configuration.
use clap::{Parser, ValueEnum};
use heavydirs_core::scanner::{ScanConfig, DEFAULT_EXCLUDES};
use heavydirs_core::DEFAULT_TOP_N;
use std::path::PathBuf;
use tracing::Level;

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Two aligned tables, sizes in human-readable units
    #[default]
    Table,
    /// The full report as pretty-printed JSON
    Json,
    /// One CSV row per ranked directory
    Csv,
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "find-heavy-dirs")]
#[command(about = "Find the largest subdirectories and the ones holding the most files")]
#[command(version)]
pub struct Args {
    /// Directories to scan (same as --path)
    #[arg(value_name = "DIR")]
    pub dirs: Vec<PathBuf>,

    /// One or more directories to scan [default: current directory]
    #[arg(long = "path", value_name = "DIR", num_args = 1..)]
    pub path: Vec<PathBuf>,

    /// Descend at most N directory levels below each root [default: unlimited]
    #[arg(long = "maxdepth", visible_alias = "max-depth", value_name = "N")]
    pub max_depth: Option<usize>,

    /// Number of entries in each table
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Skip this path and everything under it (can be used multiple times)
    #[arg(long = "exclude", value_name = "PATH")]
    pub exclude: Vec<PathBuf>,

    /// Also scan /proc, /dev, /sys and /run
    #[arg(long)]
    pub no_default_excludes: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Show progress information and warnings for unreadable entries
    #[arg(short, long)]
    pub verbose: bool,

    /// Show total execution time at the end
    #[arg(long)]
    pub display_runtime: bool,
}

impl Args {
    /// Requested roots, positional first. Empty means the current directory.
    pub fn roots(&self) -> Vec<PathBuf> {
        self.dirs.iter().chain(&self.path).cloned().collect()
    }

    pub fn scan_config(&self) -> ScanConfig {
        let mut excluded: Vec<PathBuf> = if self.no_default_excludes {
            Vec::new()
        } else {
            DEFAULT_EXCLUDES.iter().map(PathBuf::from).collect()
        };
        excluded.extend(self.exclude.iter().cloned());
        ScanConfig {
            max_depth: self.max_depth,
            excluded,
        }
    }

    /// Most verbose level the log subscriber should emit.
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::INFO
        } else {
            Level::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("find-heavy-dirs").chain(argv.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert!(args.roots().is_empty());
        assert_eq!(args.top, 20);
        assert_eq!(args.max_depth, None);
        assert_eq!(args.format, OutputFormat::Table);
        assert!(!args.verbose);
        assert_eq!(args.log_level(), Level::ERROR);
        assert_eq!(args.scan_config(), ScanConfig::default());
    }

    #[test]
    fn test_path_takes_several_values() {
        let args = parse(&["--path", "/a", "/b", "--top", "5", "--maxdepth", "3"]);
        assert_eq!(args.roots(), vec![PathBuf::from("/a"), PathBuf::from("/b")]);
        assert_eq!(args.top, 5);
        assert_eq!(args.scan_config().max_depth, Some(3));
    }

    #[test]
    fn test_positional_and_path_are_combined() {
        let args = parse(&["/x", "--path", "/y"]);
        assert_eq!(args.roots(), vec![PathBuf::from("/x"), PathBuf::from("/y")]);
    }

    #[test]
    fn test_max_depth_alias() {
        assert_eq!(parse(&["--max-depth", "0"]).max_depth, Some(0));
    }

    #[test]
    fn test_exclusions() {
        let args = parse(&["--exclude", "/mnt/nas", "--no-default-excludes"]);
        assert_eq!(args.scan_config().excluded, vec![PathBuf::from("/mnt/nas")]);

        let args = parse(&["--exclude", "/mnt/nas"]);
        let excluded = args.scan_config().excluded;
        assert_eq!(excluded.len(), DEFAULT_EXCLUDES.len() + 1);
        assert!(excluded.contains(&PathBuf::from("/proc")));
    }

    #[test]
    fn test_format_and_flags() {
        let args = parse(&["--format", "json", "-v", "--display-runtime"]);
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.display_runtime);
        assert_eq!(args.log_level(), Level::INFO);
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        let argv = ["find-heavy-dirs", "--top", "many"];
        assert!(Args::try_parse_from(argv).is_err());
        let argv = ["find-heavy-dirs", "--maxdepth", "-1"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        assert!(Args::try_parse_from(["find-heavy-dirs", "--frobnicate"]).is_err());
    }
}
