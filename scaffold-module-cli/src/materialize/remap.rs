//! Template-to-output path remapping

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Type folders recognized directly under the templates root
const SELECTORS: [&str; 3] = ["shared", "core", "wordpress"];

/// Map a template file path to its output location
///
/// `source` must lie under `<templates_root>/<selector>/...`; the selector
/// segment is stripped and the remainder is appended to `output_root`. A
/// path outside a recognized type folder signals an inconsistency between
/// the template tree and this remapper and is a hard error.
///
/// # Errors
///
/// Returns an error when `source` is not under `templates_root` or its
/// first segment below the root is not a recognized type folder.
pub fn output_path(source: &Path, templates_root: &Path, output_root: &Path) -> Result<PathBuf> {
    let relative = source.strip_prefix(templates_root).with_context(|| {
        format!(
            "Template file {} is outside the templates root {}",
            source.display(),
            templates_root.display()
        )
    })?;

    let mut components = relative.components();
    let selector = components.next().and_then(|c| c.as_os_str().to_str());

    match selector {
        Some(name) if SELECTORS.contains(&name) => Ok(output_root.join(components.as_path())),
        _ => bail!(
            "Template file {} is not under a recognized type folder",
            source.display()
        ),
    }
}
