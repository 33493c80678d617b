//! Final commit: purge the working root, promote the scratch tree, clean up

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Moves the materialized output tree over the working root and deletes
/// everything else
///
/// Promotion renames one file at a time and is not transactional: a crash
/// mid-commit leaves a partially promoted tree. Acceptable for a single-shot
/// bootstrap run.
pub struct Committer<'a> {
    root: &'a Path,
    output_dir: &'a Path,
}

impl<'a> Committer<'a> {
    /// Create a committer for the given working root and scratch directory
    #[must_use]
    pub const fn new(root: &'a Path, output_dir: &'a Path) -> Self {
        Self { root, output_dir }
    }

    /// Run the purge, promote and cleanup phases in order
    ///
    /// # Errors
    ///
    /// Returns an error when the working root cannot be listed or any
    /// deletion, directory creation or rename fails.
    pub fn commit(&self) -> Result<()> {
        self.purge()?;
        self.promote()?;
        self.cleanup()
    }

    /// Delete every entry directly under the working root except the scratch
    /// output directory
    fn purge(&self) -> Result<()> {
        let entries = fs::read_dir(self.root)
            .with_context(|| format!("Failed to list working root: {}", self.root.display()))?;

        for entry in entries {
            let entry = entry
                .with_context(|| format!("Failed to list working root: {}", self.root.display()))?;
            let path = entry.path();

            if path == self.output_dir {
                continue;
            }

            let file_type = entry
                .file_type()
                .with_context(|| format!("Failed to inspect entry: {}", path.display()))?;

            if file_type.is_dir() {
                fs::remove_dir_all(&path)
                    .with_context(|| format!("Failed to delete directory: {}", path.display()))?;
            } else {
                fs::remove_file(&path)
                    .with_context(|| format!("Failed to delete file: {}", path.display()))?;
            }
        }

        Ok(())
    }

    /// Move every file from the scratch tree to its place under the root,
    /// creating missing destination directories
    fn promote(&self) -> Result<()> {
        for entry in WalkDir::new(self.output_dir).sort_by_file_name() {
            let entry = entry.with_context(|| {
                format!("Failed to walk output tree: {}", self.output_dir.display())
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry.path().strip_prefix(self.output_dir).with_context(|| {
                format!("Output entry escaped its tree: {}", entry.path().display())
            })?;
            let destination = self.root.join(relative);

            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }

            fs::rename(entry.path(), &destination).with_context(|| {
                format!(
                    "Failed to move {} to {}",
                    entry.path().display(),
                    destination.display()
                )
            })?;
        }

        Ok(())
    }

    /// Remove the now-empty scratch tree
    fn cleanup(&self) -> Result<()> {
        fs::remove_dir_all(self.output_dir).with_context(|| {
            format!(
                "Failed to remove output directory: {}",
                self.output_dir.display()
            )
        })
    }
}
