/// Root normalization: turn user-supplied paths into a [`RootSet`] in which
/// no root lies inside another.
///
/// Sorting by path component places every directory directly before its
/// descendants, so one linear sweep that only compares against the last
/// accepted root is enough.
use crate::error::ScanError;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Deduplicated absolute roots, none of which contains another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootSet {
    roots: Vec<PathBuf>,
}

impl RootSet {
    /// Resolve user inputs to canonical paths and collapse overlaps.
    ///
    /// An empty input means the current directory. Inputs that cannot be
    /// resolved are dropped and returned as errors alongside the set.
    pub fn resolve<P: AsRef<Path>>(inputs: &[P]) -> (Self, Vec<ScanError>) {
        let mut errors = Vec::new();
        let mut resolved = Vec::with_capacity(inputs.len().max(1));

        let cwd = [Path::new(".")];
        let inputs: Vec<&Path> = if inputs.is_empty() {
            cwd.to_vec()
        } else {
            inputs.iter().map(|p| p.as_ref()).collect()
        };

        for input in inputs {
            match std::fs::canonicalize(input) {
                Ok(abs) => resolved.push(abs),
                Err(source) => {
                    let err = ScanError::Resolve {
                        path: input.to_path_buf(),
                        source,
                    };
                    warn!("{err}");
                    errors.push(err);
                }
            }
        }

        (Self::from_absolute(resolved), errors)
    }

    /// Collapse already-absolute paths. Does not touch the filesystem.
    pub fn from_absolute(mut paths: Vec<PathBuf>) -> Self {
        // `Path` orders component by component, so `/a/b` sorts before
        // `/a-b` even though '-' < '/' as bytes.
        paths.sort_unstable();

        let mut roots: Vec<PathBuf> = Vec::with_capacity(paths.len());
        for candidate in paths {
            if let Some(last) = roots.last() {
                // Covers duplicates, strict descendants and a filesystem
                // root such as `/` swallowing everything after it.
                if candidate.starts_with(last) {
                    continue;
                }
            }
            roots.push(candidate);
        }
        Self { roots }
    }

    /// Whether `path` is one of the roots or lies beneath one.
    pub fn contains(&self, path: &Path) -> bool {
        self.roots.iter().any(|root| path.starts_with(root))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.roots.iter()
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.roots
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl<'a> IntoIterator for &'a RootSet {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}
