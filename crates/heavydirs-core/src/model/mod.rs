/// Data model for a scan: per-directory totals and their aggregation.
///
/// Recording and aggregation are two separate types so that cumulative
/// totals can only be read once the bottom-up pass has finished.
pub mod dir_stat;
pub mod dir_table;
pub mod size;

pub use dir_stat::{path_depth, DirectTotals, DirectoryStat};
pub use dir_table::{AggregatedDirs, DirTable};
