/// Prune decisions made before the walker descends into a directory.
///
/// Decisions are taken per child entry while its parent's listing is being
/// processed. A pruned directory is neither recorded nor read, so its whole
/// subtree costs nothing. Files are never depth-checked on their own: a file
/// is counted exactly when its parent directory was admitted.
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Outcome of a prune check for one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Record the entry and, for a directory, descend into it.
    Admit,
    /// The directory lies deeper than the depth limit.
    TooDeep,
    /// The entry is on the exclusion list.
    Excluded,
}

impl Visit {
    #[inline]
    pub fn is_admitted(self) -> bool {
        self == Visit::Admit
    }
}

/// Depth limit plus exclusion set for one run.
#[derive(Debug, Clone, Default)]
pub struct PruneRules {
    max_depth: Option<usize>,
    excluded: HashSet<PathBuf>,
}

impl PruneRules {
    /// Build rules from a depth limit and a list of excluded paths.
    ///
    /// Excluded paths are canonicalized when they exist so that they compare
    /// equal to the canonical paths the walker produces. Paths that do not
    /// exist are kept in absolute form.
    pub fn new<I, P>(max_depth: Option<usize>, excluded: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let excluded = excluded
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                std::fs::canonicalize(p)
                    .or_else(|_| std::path::absolute(p))
                    .unwrap_or_else(|_| p.to_path_buf())
            })
            .collect();
        Self {
            max_depth,
            excluded,
        }
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        self.excluded.contains(path)
    }

    /// Decide whether an entry at `depth` segments below its root is visited.
    pub fn admits(&self, path: &Path, depth: usize, is_dir: bool) -> Visit {
        if self.is_excluded(path) {
            return Visit::Excluded;
        }
        match self.max_depth {
            Some(max) if is_dir && depth > max => Visit::TooDeep,
            _ => Visit::Admit,
        }
    }
}
