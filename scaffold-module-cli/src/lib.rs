//! bootstrap-module CLI library

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod answers;
pub mod commands;
pub mod materialize;
pub mod prompts;

pub use answers::{Answers, ModuleType};
pub use commands::BootstrapCommand;
pub use prompts::Seed;
