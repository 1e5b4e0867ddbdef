//! Path normalization utilities
//!
//! Ensures reported paths use '/' as separator and are relative to the repository root.

use std::path::{Path, PathBuf};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Path for reports: relative to root when possible, otherwise as given
pub fn display_path(path: &Path, root: &Path) -> String {
    make_relative(path, root).unwrap_or_else(|| normalize_path(path))
}

/// Resolve the repository root to an absolute path
pub fn resolve_root(root: &Path) -> PathBuf {
    root.canonicalize().unwrap_or_else(|_| {
        std::env::current_dir()
            .map(|cwd| cwd.join(root))
            .unwrap_or_else(|_| root.to_path_buf())
    })
}

/// Resolve a `[Source: ...]` file reference against the repository root.
///
/// Existing targets are canonicalized so that different spellings of the same
/// file share one cache entry.
pub fn resolve_reference(root: &Path, file_ref: &str) -> PathBuf {
    let joined = root.join(file_ref);
    joined.canonicalize().unwrap_or(joined)
}
