/// Single-threaded directory walker using `jwalk`, the traversal recorder.
///
/// `jwalk` runs in `Parallelism::Serial` mode: the walk happens on the
/// calling thread and is driven by jwalk's own worklist, so a pathologically
/// deep tree costs heap rather than call stack.
///
/// Pruning happens in `process_read_dir`, before any child is yielded or read.
/// A pruned directory is removed from its parent's child list, so it is never
/// listed and none of its descendants are visited.
///
/// Each visited directory gets a table entry. Each visited file is charged
/// to its immediate parent only; the aggregator propagates it further later.
use crate::error::{ScanDiagnostic, ScanError};
use crate::model::DirTable;
use crate::scanner::prune::PruneRules;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Walk `root` and record into `table`.
///
/// Returns the number of files recorded. Per-entry failures are pushed onto
/// `diagnostics` and the walk carries on; only an unusable root is an error.
pub fn record_root(
    root: &Path,
    rules: &PruneRules,
    table: &mut DirTable,
    diagnostics: &mut Vec<ScanDiagnostic>,
) -> Result<u64, ScanError> {
    check_root(root, rules)?;

    let child_rules = rules.clone();
    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial)
        .process_read_dir(move |_depth, _dir, _state, children| {
            children.retain(|child| match child {
                Ok(entry) => child_rules
                    .admits(&entry.path(), entry.depth, entry.file_type().is_dir())
                    .is_admitted(),
                // Keep errors so they surface as diagnostics.
                Err(_) => true,
            });
        });

    let mut files_recorded: u64 = 0;

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                note(diagnostics, walk_error_diagnostic(err.path(), root, err.to_string()));
                continue;
            }
        };

        let path = entry.path();

        if entry.file_type().is_dir() {
            table.record_dir(&path);
            // jwalk yields an unreadable directory as `Ok` and parks the
            // failure on the entry; its children are simply absent.
            if let Some(err) = &entry.read_children_error {
                note(diagnostics, ScanDiagnostic::new(&path, err.to_string()));
            }
            continue;
        }

        let Some(parent) = path.parent() else {
            continue;
        };

        // Stat without following links; a symlink counts as itself.
        match fs::symlink_metadata(&path) {
            Ok(meta) => {
                table.record_file(parent, meta.len());
                files_recorded += 1;
            }
            Err(err) => note(diagnostics, ScanDiagnostic::new(&path, err.to_string())),
        }
    }

    debug!(
        "Walked {}: {} files recorded, {} directories in table",
        root.display(),
        files_recorded,
        table.len()
    );

    Ok(files_recorded)
}

/// Some jwalk errors carry no path; blame the root being walked instead.
fn walk_error_diagnostic(path: Option<&Path>, root: &Path, message: String) -> ScanDiagnostic {
    ScanDiagnostic::new(path.unwrap_or(root), message)
}

fn note(diagnostics: &mut Vec<ScanDiagnostic>, diag: ScanDiagnostic) {
    warn!("Access denied or error at {diag}");
    diagnostics.push(diag);
}

/// Reject a root that cannot contribute anything before the walk starts.
fn check_root(root: &Path, rules: &PruneRules) -> Result<(), ScanError> {
    if rules.is_excluded(root) {
        return Err(ScanError::RootExcluded {
            path: root.to_path_buf(),
        });
    }

    let meta = fs::metadata(root).map_err(|source| ScanError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    fs::read_dir(root).map_err(|source| ScanError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;
    Ok(())
}
