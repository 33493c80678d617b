//! bootstrap-module CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use scaffold_module_cli_lib::{BootstrapCommand, ModuleType, Seed};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bootstrap-module")]
#[command(version)]
#[command(
    about = "Bootstrap a Kaiseki module from the shipped template trees",
    long_about = None
)]
struct Cli {
    /// Directory to bootstrap (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Module type; skips the type prompt
    #[arg(long, value_enum)]
    module_type: Option<ModuleType>,

    /// Module name; skips the name prompt
    #[arg(long)]
    name: Option<String>,

    /// Config base key; skips its prompt
    #[arg(long)]
    config_key: Option<String>,

    /// Module namespace; skips its prompt
    #[arg(long)]
    namespace: Option<String>,

    /// Repository URL; skips its prompt
    #[arg(long)]
    repo_url: Option<String>,

    /// Copyright holder; skips its prompt
    #[arg(long)]
    copyright_holder: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let seed = Seed {
        module_type: cli.module_type,
        name: cli.name,
        config_key: cli.config_key,
        namespace: cli.namespace,
        repo_url: cli.repo_url,
        copyright_holder: cli.copyright_holder,
    };

    let cmd = BootstrapCommand::new(cli.root, seed)?;
    cmd.execute()?;

    Ok(())
}
