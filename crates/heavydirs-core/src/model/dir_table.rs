/// Directory table with an O(D log D) bottom-up size aggregation.
///
/// The traversal writes into a [`DirTable`], which only knows direct totals.
/// [`DirTable::aggregate`] consumes it and returns [`AggregatedDirs`]: a flat
/// arena of [`DirectoryStat`] sorted deepest-first plus a path index.
use super::dir_stat::{DirectTotals, DirectoryStat};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Direct totals recorded during traversal, keyed by directory path.
#[derive(Debug, Default)]
pub struct DirTable {
    dirs: HashMap<PathBuf, DirectTotals>,
}

impl DirTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with room for `estimated_dirs` entries.
    pub fn with_capacity(estimated_dirs: usize) -> Self {
        Self {
            dirs: HashMap::with_capacity(estimated_dirs),
        }
    }

    /// Make sure `path` has an entry, even if no file is ever charged to it.
    pub fn record_dir(&mut self, path: &Path) {
        if !self.dirs.contains_key(path) {
            self.dirs.insert(path.to_path_buf(), DirectTotals::default());
        }
    }

    /// Charge one file of `size` bytes to its immediate parent directory.
    ///
    /// Nothing is added to the parent's ancestors here; that is the
    /// aggregator's job.
    pub fn record_file(&mut self, parent: &Path, size: u64) {
        match self.dirs.get_mut(parent) {
            Some(totals) => totals.add_file(size),
            None => {
                let mut totals = DirectTotals::default();
                totals.add_file(size);
                self.dirs.insert(parent.to_path_buf(), totals);
            }
        }
    }

    pub fn get(&self, path: &Path) -> Option<&DirectTotals> {
        self.dirs.get(path)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Roll every directory's totals up into its ancestors.
    ///
    /// Directories are processed in descending segment depth. A parent is
    /// always exactly one segment shallower than its child, so by the time a
    /// directory is folded into its parent all of its own descendants have
    /// already been folded into it. Each directory is visited once.
    ///
    /// A parent that was never visited (above a scan root, or pruned) simply
    /// has no entry and receives nothing.
    pub fn aggregate(self) -> AggregatedDirs {
        let mut stats: Vec<DirectoryStat> = self
            .dirs
            .into_iter()
            .map(|(path, totals)| DirectoryStat::from_direct(path, totals))
            .collect();

        // Deepest first. Ties are ordered by path only to keep the arena
        // layout reproducible between runs.
        stats.sort_unstable_by(|a, b| b.depth.cmp(&a.depth).then_with(|| a.path.cmp(&b.path)));

        let index: HashMap<PathBuf, usize> = stats
            .iter()
            .enumerate()
            .map(|(i, stat)| (stat.path.clone(), i))
            .collect();

        for i in 0..stats.len() {
            let parent_idx = match stats[i].path.parent() {
                // Filesystem roots are their own parent on some platforms.
                Some(parent) if parent != stats[i].path.as_path() => index.get(parent).copied(),
                _ => None,
            };
            let Some(j) = parent_idx else {
                continue;
            };

            // A parent sorts strictly after all of its children.
            debug_assert!(j > i, "parent processed before child");
            if j <= i {
                continue;
            }
            let (children, rest) = stats.split_at_mut(j);
            rest[0].absorb(&children[i]);
        }

        AggregatedDirs { stats, index }
    }
}

/// Every visited directory with its cumulative totals filled in.
#[derive(Debug, Clone, Default)]
pub struct AggregatedDirs {
    /// Arena sorted deepest-first.
    stats: Vec<DirectoryStat>,
    index: HashMap<PathBuf, usize>,
}

impl AggregatedDirs {
    pub fn get(&self, path: &Path) -> Option<&DirectoryStat> {
        self.index.get(path).map(|&i| &self.stats[i])
    }

    /// All stats, deepest directories first.
    pub fn iter(&self) -> impl Iterator<Item = &DirectoryStat> {
        self.stats.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}
