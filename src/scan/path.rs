//! Path canonicalization for scan roots and path keys

use crate::error::HashError;
use std::path::{Path, PathBuf};

/// Canonicalize a scan root to an absolute path.
///
/// Uses dunce so Windows roots stay in their familiar (non-UNC) form. Paths
/// found beneath the root inherit its spelling; no further normalization is
/// applied, so two spellings of one location remain distinct keys.
pub fn canonicalize_root(path: &Path) -> Result<PathBuf, HashError> {
    dunce::canonicalize(path)
        .map_err(|e| HashError::InvalidPath(format!("Failed to canonicalize {:?}: {}", path, e)))
}

/// Resolve a path that may not exist yet (e.g. a baseline file about to be created).
///
/// The parent directory is canonicalized when it exists so the result compares
/// equal to paths produced by walking a canonical root.
pub fn resolve_file_path(path: &Path) -> Result<PathBuf, HashError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    if let Ok(canonical) = dunce::canonicalize(&absolute) {
        return Ok(canonical);
    }

    match (absolute.parent(), absolute.file_name()) {
        (Some(parent), Some(name)) => match dunce::canonicalize(parent) {
            Ok(parent) => Ok(parent.join(name)),
            Err(_) => Ok(absolute),
        },
        _ => Ok(absolute),
    }
}

/// String key for a path. Non-UTF-8 paths are rejected rather than lossily converted.
pub fn path_key(path: &Path) -> Result<String, HashError> {
    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| HashError::InvalidPath(format!("Path is not valid UTF-8: {:?}", path)))
}
