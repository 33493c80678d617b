//! Interactive answer collection

use anyhow::{Context, Result};
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use std::path::Path;

use crate::answers::{self, Answers, ModuleType};

/// Attempts allowed per validated question before the run aborts
const MAX_ATTEMPTS: usize = 3;

/// Answers provided up front on the command line
///
/// A seeded answer skips its prompt but still passes through the same
/// validator; an invalid seed is an immediate error instead of a retry.
#[derive(Debug, Clone, Default)]
pub struct Seed {
    /// Pre-selected module type
    pub module_type: Option<ModuleType>,
    /// Pre-selected module name
    pub name: Option<String>,
    /// Pre-selected config base key
    pub config_key: Option<String>,
    /// Pre-selected namespace
    pub namespace: Option<String>,
    /// Pre-selected repository URL
    pub repo_url: Option<String>,
    /// Pre-selected copyright holder
    pub copyright_holder: Option<String>,
}

/// Collect all six answers, prompting for whatever the seed leaves open
///
/// # Errors
///
/// Returns an error when a seeded answer fails validation, when a prompt
/// cannot be read, or when a question exhausts its attempt budget.
pub fn collect(root: &Path, seed: Seed) -> Result<Answers> {
    let module_type = match seed.module_type {
        Some(module_type) => module_type,
        None => ask_module_type()?,
    };

    let module_name = match seed.name {
        Some(name) => {
            anyhow::ensure!(
                answers::is_valid_package_name(&name),
                "{name} is not a valid package name"
            );
            name
        }
        None => ask_module_name(root, module_type)?,
    };

    let config_base_key = match seed.config_key {
        Some(key) => key,
        None => ask_free_text(
            "Config base key",
            answers::default_config_base_key(&module_name),
        )?,
    };

    let namespace = match seed.namespace {
        Some(namespace) => {
            anyhow::ensure!(
                answers::is_valid_namespace(&namespace),
                "{namespace} is not a valid namespace"
            );
            namespace
        }
        None => ask_namespace(&module_name, module_type)?,
    };

    let repo_url = match seed.repo_url {
        Some(url) => {
            anyhow::ensure!(answers::is_valid_repo_url(&url), "{url} is not a URL");
            url
        }
        None => ask_repo_url(&module_name, module_type)?,
    };

    let copyright_holder = match seed.copyright_holder {
        Some(holder) => holder,
        None => ask_free_text(
            "Copyright holder",
            answers::DEFAULT_COPYRIGHT_HOLDER.to_string(),
        )?,
    };

    Ok(Answers {
        module_type,
        module_name,
        config_base_key,
        namespace,
        repo_url,
        copyright_holder,
    })
}

fn ask_module_type() -> Result<ModuleType> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Which type of module do you want to create")
        .items(&["wordpress", "core"])
        .default(0)
        .interact()
        .context("Failed to read module type")?;

    Ok(if selection == 1 {
        ModuleType::Core
    } else {
        ModuleType::Wordpress
    })
}

fn ask_module_name(root: &Path, module_type: ModuleType) -> Result<String> {
    ask_validated(
        &format!("Module name (kaiseki/{}*)", module_type.package_prefix()),
        answers::guess_module_name(root),
        answers::is_valid_package_name,
        "is not a valid package name",
    )
}

fn ask_namespace(module_name: &str, module_type: ModuleType) -> Result<String> {
    ask_validated(
        &format!("Module namespace ({}*)", module_type.namespace_prefix()),
        answers::default_namespace(module_name),
        answers::is_valid_namespace,
        "is not a valid namespace",
    )
}

fn ask_repo_url(module_name: &str, module_type: ModuleType) -> Result<String> {
    let package_name = format!("{}{module_name}", module_type.package_prefix());

    ask_validated(
        "URL to repository",
        answers::default_repo_url(&package_name),
        answers::is_valid_repo_url,
        "is not a URL",
    )
}

fn ask_free_text(prompt: &str, default: String) -> Result<String> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact_text()
        .with_context(|| format!("Failed to read answer for: {prompt}"))
}

/// Ask until the answer validates, giving up after the attempt budget
fn ask_validated(
    prompt: &str,
    default: String,
    is_valid: fn(&str) -> bool,
    rejection: &str,
) -> Result<String> {
    for _ in 0..MAX_ATTEMPTS {
        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(default.clone())
            .interact_text()
            .with_context(|| format!("Failed to read answer for: {prompt}"))?;

        if is_valid(&answer) {
            return Ok(answer);
        }

        println!("{} {answer} {rejection}", style("✗").red().bold());
    }

    anyhow::bail!("No valid answer after {MAX_ATTEMPTS} attempts")
}
