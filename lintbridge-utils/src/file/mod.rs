//! File system path helpers
//!
//! All normalization here is lexical: paths are cleaned without consulting
//! the filesystem, so candidate paths that were never created behave the same
//! as real ones.

use path_clean::PathClean;
use std::path::{Path, PathBuf};

/// Lexically normalize a path, resolving `.` and `..` components.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.clean()
}

/// Check whether `candidate`, resolved against `root`, lies inside the
/// subtree described by `scope` (also resolved against `root`).
///
/// The comparison is component-wise, so a sibling directory sharing a name
/// prefix (`src` vs `src2`) is outside the scope.
pub fn path_within(root: &Path, scope: &str, candidate: &str) -> bool {
    let scope_full = normalize_path(&root.join(scope));
    let candidate_full = normalize_path(&root.join(candidate));
    candidate_full.starts_with(&scope_full)
}

/// Express `path` relative to `root`.
///
/// Paths that do not live under `root` (including already-relative ones) are
/// returned unchanged.
pub fn relative_to_root(root: &Path, path: &str) -> String {
    let root_full = normalize_path(root);
    let cleaned = normalize_path(Path::new(path));
    match cleaned.strip_prefix(&root_full) {
        Ok(relative) => relative.to_string_lossy().into_owned(),
        Err(_) => path.to_string(),
    }
}
