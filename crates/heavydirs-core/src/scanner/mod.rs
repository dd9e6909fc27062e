/// Scanner module: orchestrates one run over a set of roots.
///
/// A run goes through three stages, each finishing before the next starts:
/// - **Normalize:** collapse the requested roots into a [`RootSet`].
/// - **Record:** walk each root once, charging files to their immediate
///   parent directory in a [`DirTable`].
/// - **Aggregate:** fold the table bottom-up into [`AggregatedDirs`].
///
/// All state lives in a [`ScanSession`] owned by the caller. Everything runs
/// on the calling thread.
pub mod prune;
pub mod roots;
pub mod walker;

pub use prune::{PruneRules, Visit};
pub use roots::RootSet;

use crate::analysis::{self, HeavyDirsReport};
use crate::error::{ScanDiagnostic, ScanError};
use crate::model::{AggregatedDirs, DirTable};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Pseudo-filesystem mount points skipped unless the caller opts out.
pub const DEFAULT_EXCLUDES: [&str; 4] = ["/proc", "/dev", "/sys", "/run"];

/// Initial table capacity; the map grows past this if needed.
const ESTIMATED_DIRS: usize = 16_384;

/// Traversal settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Deepest directory level visited below each root (root = 0).
    /// `None` means unlimited.
    pub max_depth: Option<usize>,
    /// Absolute paths that are never visited.
    pub excluded: Vec<PathBuf>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            excluded: DEFAULT_EXCLUDES.iter().map(PathBuf::from).collect(),
        }
    }
}

impl ScanConfig {
    /// Configuration with no exclusions at all.
    pub fn unrestricted() -> Self {
        Self {
            max_depth: None,
            excluded: Vec::new(),
        }
    }
}

/// State for a single run: the directory table plus everything learned
/// while filling it.
#[derive(Debug)]
pub struct ScanSession {
    rules: PruneRules,
    table: DirTable,
    files_recorded: u64,
    diagnostics: Vec<ScanDiagnostic>,
    started: Instant,
}

impl ScanSession {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            rules: PruneRules::new(config.max_depth, &config.excluded),
            table: DirTable::with_capacity(ESTIMATED_DIRS),
            files_recorded: 0,
            diagnostics: Vec::new(),
            started: Instant::now(),
        }
    }

    /// Walk one absolute root and add its entries to the session.
    ///
    /// Returns the number of files recorded for this root. An error means the
    /// root contributed nothing; the session stays usable for other roots.
    pub fn scan_root(&mut self, root: &Path) -> Result<u64, ScanError> {
        info!("Scanning {}", root.display());
        let files =
            walker::record_root(root, &self.rules, &mut self.table, &mut self.diagnostics)?;
        self.files_recorded += files;
        Ok(files)
    }

    /// Record a failure that happened outside the walker (e.g. root resolution).
    pub fn note_error(&mut self, err: &ScanError) {
        self.diagnostics.push(ScanDiagnostic::from(err));
    }

    pub fn files_recorded(&self) -> u64 {
        self.files_recorded
    }

    pub fn diagnostics(&self) -> &[ScanDiagnostic] {
        &self.diagnostics
    }

    /// Aggregate the table and close the session.
    pub fn finish(self, roots: RootSet) -> ScanOutcome {
        let walk_time = self.started.elapsed();
        let dirs = self.table.aggregate();
        let duration = self.started.elapsed();
        debug!(
            "Aggregated {} directories in {:?} (walk took {:?})",
            dirs.len(),
            duration.saturating_sub(walk_time),
            walk_time
        );
        ScanOutcome {
            roots,
            dirs,
            files_recorded: self.files_recorded,
            diagnostics: self.diagnostics,
            duration,
        }
    }
}

/// Everything a finished run produced.
#[derive(Debug)]
pub struct ScanOutcome {
    pub roots: RootSet,
    pub dirs: AggregatedDirs,
    /// Files recorded across all roots.
    pub files_recorded: u64,
    pub diagnostics: Vec<ScanDiagnostic>,
    /// Wall time from session start to the end of aggregation.
    pub duration: Duration,
}

impl ScanOutcome {
    /// Top-N views over the directories under the scanned roots.
    pub fn report(&self, top_n: usize) -> HeavyDirsReport {
        analysis::heavy_dirs(&self.dirs, &self.roots, self.files_recorded, top_n)
    }
}

/// Run the whole pipeline: normalize `inputs`, walk every root, aggregate.
///
/// Never fails as a whole. Unresolvable inputs and unreadable roots are
/// logged, collected in [`ScanOutcome::diagnostics`] and skipped.
pub fn run_scan<P: AsRef<Path>>(inputs: &[P], config: &ScanConfig) -> ScanOutcome {
    let mut session = ScanSession::new(config);

    let (roots, resolve_errors) = RootSet::resolve(inputs);
    for err in &resolve_errors {
        session.note_error(err);
    }

    info!("Targets: {:?}", roots.as_slice());
    if let Some(max) = config.max_depth {
        info!("Max Depth: {max}");
    }

    for root in &roots {
        if let Err(err) = session.scan_root(root) {
            warn!("{err}");
            session.note_error(&err);
        }
    }

    info!(
        "Scan complete. Found {} files. Aggregating data...",
        session.files_recorded()
    );
    session.finish(roots)
}
