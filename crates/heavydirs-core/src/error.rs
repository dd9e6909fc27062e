/// Error types for the scan pipeline.
///
/// Nothing in here is fatal to a whole run. A [`ScanError`] costs one root its
/// contribution; a [`ScanDiagnostic`] costs one entry.
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A failure that prevents one requested root from being scanned.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The input could not be turned into an absolute, canonical path.
    #[error("could not resolve path {}: {source}", path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The root exists but its listing could not be opened.
    #[error("error walking path {}: {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("{} is on the exclusion list", path.display())]
    RootExcluded { path: PathBuf },
}

impl ScanError {
    /// The path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ScanError::Resolve { path, .. }
            | ScanError::RootUnreadable { path, .. }
            | ScanError::NotADirectory { path }
            | ScanError::RootExcluded { path } => path,
        }
    }
}

/// A non-fatal problem with a single entry (permission denied, entry vanished
/// between listing and stat, transient read failure) or a dropped root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanDiagnostic {
    pub path: PathBuf,
    pub message: String,
}

impl ScanDiagnostic {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<&ScanError> for ScanDiagnostic {
    fn from(err: &ScanError) -> Self {
        Self::new(err.path(), err.to_string())
    }
}

impl fmt::Display for ScanDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}
