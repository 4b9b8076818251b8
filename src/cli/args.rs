//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Interactive command shell built on the cmdkit dispatcher
#[derive(Parser, Debug)]
#[command(name = "cmdkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Settings file layered over the global config
    #[arg(long, value_hint = ValueHint::FilePath, env = "CMDKIT_CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Prompt shown before each line
    #[arg(long)]
    pub prompt: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Run LINE non-interactively and exit (repeatable)
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub commands: Vec<String>,

    /// Generate shell completions
    #[arg(long = "generator", value_enum)]
    pub generator: Option<clap_complete::Shell>,

    /// Print author and version
    #[arg(long)]
    pub info: bool,
}
