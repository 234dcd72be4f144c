use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::domain::{find_last_change, relative_path, revision_of, ConsistencyResult, StatusEntry};
use crate::error::Result;
use crate::svn::Subversion;
use crate::warning::ConsistencyWarning;

fn real_path(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Finds the highest revision among `entries` and the file carrying it,
/// relative to the real (symlink-resolved) `root`.
pub fn analyze_consistency(root: &Path, entries: &[StatusEntry]) -> ConsistencyResult {
    let real_root = real_path(root);

    match find_last_change(entries) {
        Some((max_revision, path)) => ConsistencyResult {
            max_revision,
            file: Some(relative_path(&real_root, &real_path(path))),
        },
        None => ConsistencyResult::default(),
    }
}

/// Runs `svn status` on `dir` and reports its last changed revision.
pub fn last_change<S: Subversion + ?Sized>(svn: &S, dir: &Path) -> Result<ConsistencyResult> {
    let entries = svn.status(dir)?;
    debug!("{} status entries under {}", entries.len(), dir.display());
    Ok(analyze_consistency(dir, &entries))
}

/// Compares the nominal version against the working copy's last change.
///
/// Returns a warning when some file is newer than the revision in
/// `version_id` (the part after its last `@`). Never fails: a version id
/// without a numeric revision is not checked.
pub fn check_consistency(
    version_id: &str,
    result: &ConsistencyResult,
) -> Option<ConsistencyWarning> {
    let Some(root_revision) = revision_of(version_id) else {
        debug!("cannot check consistency of '{}'", version_id);
        return None;
    };

    (result.max_revision > root_revision).then(|| ConsistencyWarning::MixedRevision {
        last_revision: result.max_revision,
        root_revision,
        file: result.file.clone(),
    })
}
