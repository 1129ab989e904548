// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Report data model.

use crate::commands::Command;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Area of the codebase a convention describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConventionCategory {
    Naming,
    Imports,
    Typescript,
    Testing,
    CodeStyle,
    Components,
    Structure,
    Documentation,
    Logging,
    ErrorHandling,
    Async,
    Architecture,
}

impl ConventionCategory {
    /// Short tag, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConventionCategory::Naming => "naming",
            ConventionCategory::Imports => "imports",
            ConventionCategory::Typescript => "typescript",
            ConventionCategory::Testing => "testing",
            ConventionCategory::CodeStyle => "code-style",
            ConventionCategory::Components => "components",
            ConventionCategory::Structure => "structure",
            ConventionCategory::Documentation => "documentation",
            ConventionCategory::Logging => "logging",
            ConventionCategory::ErrorHandling => "error-handling",
            ConventionCategory::Async => "async",
            ConventionCategory::Architecture => "architecture",
        }
    }

    /// Heading used when rendering.
    pub fn title(&self) -> &'static str {
        match self {
            ConventionCategory::Naming => "Naming",
            ConventionCategory::Imports => "Imports",
            ConventionCategory::Typescript => "TypeScript",
            ConventionCategory::Testing => "Testing",
            ConventionCategory::CodeStyle => "Code Style",
            ConventionCategory::Components => "Components",
            ConventionCategory::Structure => "Structure",
            ConventionCategory::Documentation => "Documentation",
            ConventionCategory::Logging => "Logging",
            ConventionCategory::ErrorHandling => "Error Handling",
            ConventionCategory::Async => "Async",
            ConventionCategory::Architecture => "Architecture",
        }
    }
}

impl fmt::Display for ConventionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A convention the repository appears to follow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Convention {
    pub category: ConventionCategory,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl Convention {
    /// Create a convention without an example.
    pub fn new(category: ConventionCategory, description: impl Into<String>) -> Self {
        Self {
            category,
            description: description.into(),
            example: None,
        }
    }

    /// Attach an example.
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }
}

/// Commit message style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitStyle {
    Conventional,
    Gitmoji,
    Freeform,
}

impl CommitStyle {
    /// Style name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitStyle::Conventional => "conventional",
            CommitStyle::Gitmoji => "gitmoji",
            CommitStyle::Freeform => "freeform",
        }
    }

    /// Canonical message template for the style.
    pub fn format(&self) -> &'static str {
        match self {
            CommitStyle::Conventional => "<type>(<scope>): <subject>",
            CommitStyle::Gitmoji => "<emoji> <subject>",
            CommitStyle::Freeform => "<subject>",
        }
    }
}

/// How commit messages are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitConvention {
    pub style: CommitStyle,
    pub format: String,
    /// Most frequent conventional types, most common first.
    pub types: Vec<String>,
}

/// Branch naming vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchConvention {
    /// Prefixes before the first `/`, most common first.
    pub prefixes: Vec<String>,
}

/// Git conventions; either part is absent without enough history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitConventions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<CommitConvention>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<BranchConvention>,
}

impl GitConventions {
    /// Whether nothing was inferred.
    pub fn is_empty(&self) -> bool {
        self.commit.is_none() && self.branch.is_none()
    }
}

/// The result of one analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub conventions: Vec<Convention>,
    pub git: GitConventions,
    /// Prioritized, deduplicated commands.
    pub commands: Vec<Command>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tags() {
        assert_eq!(ConventionCategory::CodeStyle.as_str(), "code-style");
        assert_eq!(ConventionCategory::ErrorHandling.to_string(), "error-handling");
        let json = serde_json::to_string(&ConventionCategory::ErrorHandling).unwrap();
        assert_eq!(json, "\"error-handling\"");
    }

    #[test]
    fn test_convention_example_skipped_when_absent() {
        let c = Convention::new(ConventionCategory::Naming, "Components use PascalCase naming");
        let json = serde_json::to_string(&c).unwrap();
        assert!(!json.contains("example"));

        let c = c.with_example("UserCard.tsx");
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("UserCard.tsx"));
    }

    #[test]
    fn test_commit_style_formats() {
        assert_eq!(CommitStyle::Conventional.format(), "<type>(<scope>): <subject>");
        assert_eq!(CommitStyle::Gitmoji.as_str(), "gitmoji");
    }

    #[test]
    fn test_empty_git_conventions() {
        assert!(GitConventions::default().is_empty());
        let json = serde_json::to_string(&GitConventions::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
