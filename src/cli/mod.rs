//! CLI layer: argument parsing and command execution

pub mod args;
pub mod commands;
pub mod error;

pub use args::Cli;
pub use error::{CliError, CliResult};
