//! CLI command implementations

pub mod bootstrap;

pub use bootstrap::BootstrapCommand;
