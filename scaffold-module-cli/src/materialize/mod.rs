//! Template materialization pipeline
//!
//! Enumerates the shared and type-specific template trees, substitutes
//! placeholders into every file, writes the results into a scratch output
//! tree, and finally commits that tree over the working root.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::answers::Answers;

pub mod commit;
pub mod enumerate;
pub mod remap;
pub mod substitute;

pub use commit::Committer;
pub use enumerate::list_files;
pub use remap::output_path;
pub use substitute::apply;

/// Directory under the working root holding the template trees
pub const TEMPLATES_DIR: &str = "templates";

/// Scratch directory the rendered files are staged in before the commit
pub const OUTPUT_DIR: &str = "output";

/// Template tree every module type receives
pub const SHARED_DIR: &str = "shared";

/// Render every template file for the selected type into the scratch output
/// tree and return the number of files written
///
/// Files from the shared tree are written first; a type-specific file with
/// the same relative path overwrites the shared one.
///
/// # Errors
///
/// Returns an error when a template cannot be read, lies outside a
/// recognized type folder, or its output cannot be written.
pub fn write_output(root: &Path, answers: &Answers) -> Result<usize> {
    let templates_root = root.join(TEMPLATES_DIR);
    let output_root = root.join(OUTPUT_DIR);

    let mut files = list_files(&templates_root.join(SHARED_DIR))?;
    files.extend(list_files(&templates_root.join(answers.module_type.folder()))?);

    let mapping = answers.placeholder_mapping();

    for source in &files {
        let destination = output_path(source, &templates_root, &output_root)?;

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = fs::read(source)
            .with_context(|| format!("Failed to read template: {}", source.display()))?;

        if substitute::is_binary(&content) {
            fs::write(&destination, &content)
                .with_context(|| format!("Failed to write file: {}", destination.display()))?;
        } else {
            let rendered = apply(&String::from_utf8_lossy(&content), &mapping);
            fs::write(&destination, rendered)
                .with_context(|| format!("Failed to write file: {}", destination.display()))?;
        }
    }

    Ok(files.len())
}
