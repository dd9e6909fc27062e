/// Per-directory totals.
///
/// During traversal only [`DirectTotals`] exist. A [`DirectoryStat`] is
/// produced by the aggregator and carries both the direct and the cumulative
/// (whole-subtree) numbers.
use std::path::{Path, PathBuf};

/// Number of path segments in `path`.
///
/// The aggregator orders directories by this value and the traversal
/// measures its depth limit in the same unit, so `/a/b` is always deeper
/// than `/a` regardless of how long the individual names are.
#[inline]
pub fn path_depth(path: &Path) -> usize {
    path.components().count()
}

/// Totals contributed by files whose immediate parent is one directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectTotals {
    pub file_count: u64,
    pub size: u64,
}

impl DirectTotals {
    /// Charge one file of `size` bytes to this directory.
    #[inline]
    pub fn add_file(&mut self, size: u64) {
        self.file_count += 1;
        self.size += size;
    }
}

/// One visited directory after aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryStat {
    /// Absolute, canonical directory path.
    pub path: PathBuf,

    /// Segment count of `path`, see [`path_depth`].
    pub depth: usize,

    /// Files whose immediate parent is this directory.
    pub direct_file_count: u64,

    /// Bytes of files whose immediate parent is this directory.
    pub direct_size: u64,

    /// Files in this directory and every visited descendant.
    pub cumulative_file_count: u64,

    /// Bytes in this directory and every visited descendant.
    pub cumulative_size: u64,
}

impl DirectoryStat {
    /// Build a stat whose cumulative totals start equal to the direct ones.
    pub fn from_direct(path: PathBuf, direct: DirectTotals) -> Self {
        Self {
            depth: path_depth(&path),
            path,
            direct_file_count: direct.file_count,
            direct_size: direct.size,
            cumulative_file_count: direct.file_count,
            cumulative_size: direct.size,
        }
    }

    /// Fold a fully aggregated child into this directory's cumulative totals.
    #[inline]
    pub fn absorb(&mut self, child: &DirectoryStat) {
        self.cumulative_file_count += child.cumulative_file_count;
        self.cumulative_size += child.cumulative_size;
    }
}
