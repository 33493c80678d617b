//! Recursive template-file enumeration

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// List every regular file under `dir`, depth-first in lexicographic order
///
/// A missing root yields an empty list so the caller can merge the shared
/// tree with an optional type-specific tree without special-casing.
/// Directories are never included and symlinks are not followed.
///
/// # Errors
///
/// Returns an error when an existing directory cannot be traversed.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", dir.display()))?;

        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
