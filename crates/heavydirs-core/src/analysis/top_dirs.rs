/// Top-N heaviest directories, by cumulative size and by file count.
///
/// Aggregation can touch directories above the scan roots, so only entries
/// under a root are considered. The two views are ranked independently: the
/// largest directory is not necessarily the most crowded one.
use crate::model::{AggregatedDirs, DirectoryStat};
use crate::scanner::RootSet;
use serde::Serialize;
use std::cmp::Ordering;
use std::path::PathBuf;

/// Rows per view when the caller does not say otherwise.
pub const DEFAULT_TOP_N: usize = 20;

/// One ranked directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeavyDir {
    pub path: PathBuf,
    /// Cumulative bytes.
    pub size: u64,
    /// Cumulative file count.
    pub file_count: u64,
}

impl From<&DirectoryStat> for HeavyDir {
    fn from(stat: &DirectoryStat) -> Self {
        Self {
            path: stat.path.clone(),
            size: stat.cumulative_size,
            file_count: stat.cumulative_file_count,
        }
    }
}

/// What the reporter receives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeavyDirsReport {
    pub roots: Vec<PathBuf>,
    /// Files recorded across all roots.
    pub total_files: u64,
    /// Cumulative bytes across all roots.
    pub total_size: u64,
    pub by_size: Vec<HeavyDir>,
    pub by_count: Vec<HeavyDir>,
}

/// Build both views, each truncated to `top_n` rows.
pub fn heavy_dirs(
    dirs: &AggregatedDirs,
    roots: &RootSet,
    total_files: u64,
    top_n: usize,
) -> HeavyDirsReport {
    let candidates: Vec<&DirectoryStat> = dirs.iter().filter(|s| roots.contains(&s.path)).collect();

    let total_size = roots
        .iter()
        .filter_map(|root| dirs.get(root))
        .map(|s| s.cumulative_size)
        .sum();

    HeavyDirsReport {
        roots: roots.as_slice().to_vec(),
        total_files,
        total_size,
        by_size: top_by(&candidates, top_n, |s| s.cumulative_size),
        by_count: top_by(&candidates, top_n, |s| s.cumulative_file_count),
    }
}

/// The `n` entries with the largest `key`, descending. Equal keys are
/// ordered by path so the output is stable from run to run.
///
/// Uses `select_nth_unstable_by` (O(n) average) to bring the top-N to the
/// front, then sorts only those N entries.
pub fn top_by<F>(candidates: &[&DirectoryStat], n: usize, key: F) -> Vec<HeavyDir>
where
    F: Fn(&DirectoryStat) -> u64,
{
    if n == 0 || candidates.is_empty() {
        return Vec::new();
    }

    let order = |a: &&DirectoryStat, b: &&DirectoryStat| -> Ordering {
        key(*b).cmp(&key(*a)).then_with(|| a.path.cmp(&b.path))
    };

    let mut ranked: Vec<&DirectoryStat> = candidates.to_vec();
    if ranked.len() > n {
        ranked.select_nth_unstable_by(n - 1, order);
        ranked.truncate(n);
    }
    ranked.sort_unstable_by(order);

    ranked.into_iter().map(HeavyDir::from).collect()
}
