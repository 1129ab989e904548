// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::report::OutputFormat;

/// repoconv - Repository convention analyzer
///
/// Infers the naming, documentation, logging, error-handling and git
/// conventions a repository follows, and ranks its developer commands.
#[derive(Parser, Debug)]
#[command(name = "repoconv")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Infer the conventions a repository follows", long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// The command to run (defaults to analyze if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Analyze arguments accepted without the `analyze` subcommand
    #[command(flatten)]
    pub analyze: AnalyzeArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "REPOCONV_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Analyze a repository and print its conventions (default command)
    Analyze(AnalyzeArgs),

    /// List the repository's developer commands
    Commands(CommandsArgs),

    /// Write an example repoconv.toml
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the analyze command.
#[derive(Args, Debug, Default, Clone)]
pub struct AnalyzeArgs {
    /// Repository root (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Output format (overrides the configuration file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Maximum number of commands in the quick reference
    #[arg(long, value_name = "N")]
    pub max_commands: Option<usize>,

    /// Skip git history
    #[arg(long)]
    pub no_git: bool,
}

/// Arguments for the commands command.
#[derive(Args, Debug, Default, Clone)]
pub struct CommandsArgs {
    /// Repository root (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Show every command grouped by category instead of the quick reference
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for the init command.
#[derive(Args, Debug, Default, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Analyze with the top-level
    /// arguments if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Analyze(self.analyze.clone()))
    }
}
