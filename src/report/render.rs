// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Markdown and JSON rendering of a [`Report`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::commands::{categorize, group_by_category, quick_reference, Category, Command};
use crate::error::Result;

use super::types::{ConventionCategory, Convention, GitConventions, Report};

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable markdown (default)
    #[default]
    Markdown,
    /// JSON for machine parsing
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Markdown => f.write_str("markdown"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Render a report in the requested format.
pub fn render(report: &Report, format: OutputFormat, quick_ref_n: usize) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(render_markdown(report, quick_ref_n)),
        OutputFormat::Json => render_json(report, quick_ref_n),
    }
}

/// Render a report as markdown.
pub fn render_markdown(report: &Report, quick_ref_n: usize) -> String {
    let mut lines: Vec<String> = vec!["# Repository Conventions".to_string(), String::new()];

    lines.push("## Conventions".to_string());
    lines.push(String::new());
    if report.conventions.is_empty() {
        lines.push("No conventions detected.".to_string());
        lines.push(String::new());
    } else {
        for (category, conventions) in group_conventions(&report.conventions) {
            lines.push(format!("### {}", category.title()));
            lines.push(String::new());
            for convention in conventions {
                lines.push(match &convention.example {
                    Some(example) => format!("- {} (e.g. `{}`)", convention.description, example),
                    None => format!("- {}", convention.description),
                });
            }
            lines.push(String::new());
        }
    }

    if !report.git.is_empty() {
        lines.extend(git_section(&report.git));
    }

    let quick = quick_reference(&report.commands, quick_ref_n);
    if !quick.is_empty() {
        lines.push("## Quick Reference".to_string());
        lines.push(String::new());
        lines.push("| Command | Category | Description |".to_string());
        lines.push("|---------|----------|-------------|".to_string());
        for command in &quick {
            lines.push(format!(
                "| `{}` | {} | {} |",
                command.name,
                categorize(command),
                escape_cell(&command.description)
            ));
        }
        lines.push(String::new());
    }

    if !report.commands.is_empty() {
        lines.push("## Commands".to_string());
        lines.push(String::new());
        for (category, commands) in group_by_category(&report.commands) {
            lines.push(format!("### {}", category));
            lines.push(String::new());
            for command in commands {
                if command.description.is_empty() {
                    lines.push(format!("- `{}`", command.name));
                } else {
                    lines.push(format!("- `{}`: {}", command.name, command.description));
                }
            }
            lines.push(String::new());
        }
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn git_section(git: &GitConventions) -> Vec<String> {
    let mut lines = vec!["## Git".to_string(), String::new()];

    if let Some(commit) = &git.commit {
        lines.push(format!("- Commit style: {}", commit.style.as_str()));
        lines.push(format!("- Format: `{}`", commit.format));
        if !commit.types.is_empty() {
            lines.push(format!("- Common types: {}", commit.types.join(", ")));
        }
    }
    if let Some(branch) = &git.branch {
        let prefixes: Vec<String> = branch.prefixes.iter().map(|p| format!("`{}/`", p)).collect();
        lines.push(format!("- Branch prefixes: {}", prefixes.join(", ")));
    }

    lines.push(String::new());
    lines
}

/// Group conventions by category, categories in first-emitted order.
fn group_conventions(conventions: &[Convention]) -> Vec<(ConventionCategory, Vec<&Convention>)> {
    let mut groups: Vec<(ConventionCategory, Vec<&Convention>)> = Vec::new();
    for convention in conventions {
        match groups.iter_mut().find(|(c, _)| *c == convention.category) {
            Some((_, group)) => group.push(convention),
            None => groups.push((convention.category, vec![convention])),
        }
    }
    groups
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

#[derive(Serialize)]
struct JsonCommand<'a> {
    name: &'a str,
    description: &'a str,
    category: Category,
    priority: u8,
}

impl<'a> From<&'a Command> for JsonCommand<'a> {
    fn from(command: &'a Command) -> Self {
        let category = categorize(command);
        Self {
            name: &command.name,
            description: &command.description,
            category,
            priority: category.priority(),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    conventions: &'a [Convention],
    git: &'a GitConventions,
    commands: Vec<JsonCommand<'a>>,
    quick_reference: Vec<JsonCommand<'a>>,
}

/// Render a report as pretty-printed JSON.
pub fn render_json(report: &Report, quick_ref_n: usize) -> Result<String> {
    let quick = quick_reference(&report.commands, quick_ref_n);
    let json = JsonReport {
        conventions: &report.conventions,
        git: &report.git,
        commands: report.commands.iter().map(JsonCommand::from).collect(),
        quick_reference: quick.iter().map(JsonCommand::from).collect(),
    };
    Ok(serde_json::to_string_pretty(&json)?)
}
