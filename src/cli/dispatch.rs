// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::analysis::{Analyzer, FsReader};
use crate::commands::{discover, group_by_category, prioritize, quick_reference, Command};
use crate::config::RepoconvConfig;
use crate::error::{ConfigError, InputError, Result, ResultExt};
use crate::inventory::{self, FileInfo};
use crate::report::{render, OutputFormat};

use super::args::{AnalyzeArgs, Cli, Commands, CommandsArgs, InitArgs};

/// Name of the file written by `repoconv init`.
const INIT_FILE: &str = "repoconv.toml";

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Analyze(args) => run_analyze(&cli, args),
        Commands::Commands(args) => run_commands(&cli, args),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Resolve the repository root to an absolute directory.
fn resolve_root(path: Option<PathBuf>) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    std::fs::canonicalize(&path)
        .ok()
        .filter(|p| p.is_dir())
        .ok_or_else(|| InputError::RootNotDirectory { path }.into())
}

/// Load the configuration that applies to `root`.
fn load_config(cli: &Cli, root: &Path) -> Result<RepoconvConfig> {
    match &cli.config {
        Some(path) => RepoconvConfig::load_from(path),
        None => RepoconvConfig::load_for(root),
    }
}

/// Discovered commands plus the ones listed in the configuration.
fn collect_commands(root: &Path, files: &[FileInfo], config: &RepoconvConfig) -> Vec<Command> {
    let mut commands = if config.commands.discover {
        discover(root, files, &FsReader)
    } else {
        Vec::new()
    };
    commands.extend(config.commands.extra.iter().cloned());
    commands
}

fn spinner(message: &str) -> Option<ProgressBar> {
    if !Term::stderr().is_term() {
        return None;
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    Some(spinner)
}

/// Run the analyze command.
fn run_analyze(cli: &Cli, args: AnalyzeArgs) -> Result<()> {
    tracing::debug!("Running analyze command with args: {:?}", args);

    let root = resolve_root(args.path)?;
    let config = load_config(cli, &root)?;
    let format = args.format.unwrap_or(config.output.format);
    let quick_ref_n = args.max_commands.unwrap_or(config.commands.quick_reference);

    let progress = if format == OutputFormat::Markdown {
        spinner("Scanning repository...")
    } else {
        None
    };

    let files = inventory::scan(&root, &config.inventory)?;
    tracing::debug!("Inventory has {} entries", files.len());
    let commands = collect_commands(&root, &files, &config);

    if let Some(p) = &progress {
        p.set_message("Analyzing conventions...");
    }

    let mut analyzer = Analyzer::new().with_commit_sample(config.git.max_commits);
    if args.no_git || !config.git.enabled {
        analyzer = analyzer.without_git();
    }
    let result = analyzer.analyze(&root, &files, &commands);

    if let Some(p) = progress {
        p.finish_and_clear();
    }
    let report = result?;
    let rendered = render(&report, format, quick_ref_n)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .context(format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} Wrote {} conventions and {} commands to {}",
                style("✓").green().bold(),
                report.conventions.len(),
                report.commands.len(),
                style(path.display()).cyan()
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Run the commands command.
fn run_commands(cli: &Cli, args: CommandsArgs) -> Result<()> {
    tracing::debug!("Running commands command with args: {:?}", args);

    let root = resolve_root(args.path)?;
    let config = load_config(cli, &root)?;
    let files = inventory::scan(&root, &config.inventory)?;
    let commands = collect_commands(&root, &files, &config);

    if commands.is_empty() {
        println!("{}", style("No commands found.").dim());
        return Ok(());
    }

    let print_command = |command: &Command| {
        if command.description.is_empty() {
            println!("  {}", style(&command.name).cyan());
        } else {
            println!(
                "  {}  {}",
                style(&command.name).cyan(),
                style(&command.description).dim()
            );
        }
    };

    if args.all {
        for (category, group) in group_by_category(&commands) {
            println!("{}", style(category).bold());
            group.iter().for_each(print_command);
        }
        println!();
        println!(
            "{} unique commands",
            style(prioritize(&commands).len()).bold()
        );
    } else {
        println!("{}", style("Quick reference").bold());
        quick_reference(&commands, config.commands.quick_reference)
            .iter()
            .for_each(print_command);
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("repoconv {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = Path::new(INIT_FILE);

    if config_path.exists() && !args.force {
        return Err(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }
        .into());
    }

    std::fs::write(config_path, example_config()).context("Failed to write configuration")?;

    println!("{} Created {}", style("✓").green().bold(), INIT_FILE);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CommandsConfig;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_root() {
        let dir = TempDir::new().unwrap();
        let root = resolve_root(Some(dir.path().to_path_buf())).unwrap();
        assert!(root.is_absolute());

        let missing = resolve_root(Some(dir.path().join("missing")));
        assert!(missing.is_err());

        fs::write(dir.path().join("file.txt"), "").unwrap();
        assert!(resolve_root(Some(dir.path().join("file.txt"))).is_err());
    }

    #[test]
    fn test_collect_commands() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Gemfile"), "").unwrap();
        let files = vec![FileInfo::file("Gemfile")];

        let mut config = RepoconvConfig::default();
        config.commands.extra = vec![Command::new("./scripts/release.sh", "Cut a release")];
        let commands = collect_commands(dir.path(), &files, &config);
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].name, "bundle install");

        config.commands = CommandsConfig {
            discover: false,
            ..CommandsConfig::default()
        };
        assert!(collect_commands(dir.path(), &files, &config).is_empty());
    }
}
