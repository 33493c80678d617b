//! Module bootstrap command

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use crate::answers::Answers;
use crate::materialize::{self, Committer, OUTPUT_DIR};
use crate::prompts::{self, Seed};

/// Turn the working root into a ready module repository
///
/// Stages run strictly in order: collect answers, render templates into the
/// scratch tree, purge the root, promote the rendered files, remove the
/// scratch tree. No stage is re-entered; a failure aborts the run.
pub struct BootstrapCommand {
    root: PathBuf,
    seed: Seed,
}

impl BootstrapCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `root` - Directory to bootstrap; defaults to the current directory
    /// * `seed` - Answers already provided on the command line
    ///
    /// # Errors
    ///
    /// Returns an error if the working root cannot be resolved.
    pub fn new(root: Option<PathBuf>, seed: Seed) -> Result<Self> {
        let root = match root {
            Some(dir) => dir,
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };

        let root = root
            .canonicalize()
            .with_context(|| format!("Failed to resolve working root: {}", root.display()))?;

        Ok(Self { root, seed })
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if answer collection fails, a template cannot be
    /// rendered, or the commit step fails.
    pub fn execute(&self) -> Result<()> {
        println!(
            "{} {} {}",
            style("Bootstrapping").green().bold(),
            style("module in:").bold(),
            style(self.root.display()).cyan().bold()
        );
        println!();

        let answers = prompts::collect(&self.root, self.seed.clone())?;

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        spinner.set_message("Rendering templates...");
        let written = materialize::write_output(&self.root, &answers)?;

        spinner.set_message("Promoting generated files...");
        let output_dir = self.root.join(OUTPUT_DIR);
        Committer::new(&self.root, &output_dir).commit()?;

        spinner.finish_and_clear();

        Self::print_success(&answers, written);

        Ok(())
    }

    /// Print success message with next steps
    fn print_success(answers: &Answers, written: usize) {
        println!(
            "{} {}",
            style("✓ Module bootstrapped successfully!").green().bold(),
            style(format!("({written} files)")).dim()
        );
        println!();
        println!(
            "  {} {}",
            style("Package:").bold(),
            style(format!("kaiseki/{}", answers.package_name())).cyan()
        );
        println!(
            "  {} {}",
            style("Namespace:").bold(),
            style(format!(
                "{}{}",
                answers.module_type.namespace_prefix(),
                answers.namespace
            ))
            .cyan()
        );
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!("  {} Review the generated files", style("1.").cyan());
        println!();
        println!("  {} Install dependencies:", style("2.").cyan());
        println!("     {} {}", style("$").dim(), style("composer install").cyan());
        println!();
        println!("  {} Push to the repository:", style("3.").cyan());
        println!("     {}", style(&answers.repo_url).cyan().underlined());
        println!();
    }
}
