/// find-heavy-dirs core: root normalization, traversal, aggregation.
///
/// This crate contains all business logic with no CLI dependencies.
/// A run is owned by a single [`scanner::ScanSession`]; nothing here keeps
/// process-wide state, so independent runs never see each other's data.
///
/// # Modules
///
/// - [`model`]: per-directory totals and the bottom-up aggregator.
/// - [`scanner`]: root normalization and the single-pass traversal recorder.
/// - [`analysis`]: top-N selection over the aggregated totals.
/// - [`error`]: per-root errors and per-entry diagnostics.
pub mod analysis;
pub mod error;
pub mod model;
pub mod scanner;

pub use analysis::{HeavyDir, HeavyDirsReport, DEFAULT_TOP_N};
pub use error::{ScanDiagnostic, ScanError};
pub use model::{AggregatedDirs, DirTable, DirectoryStat};
pub use scanner::{run_scan, RootSet, ScanConfig, ScanOutcome, ScanSession};
