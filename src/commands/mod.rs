// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Developer commands: categorization, ranking and discovery.

mod categorize;
pub mod discover;
mod prioritize;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use categorize::{categorize, category_rules, CategoryRule};
pub use discover::discover;
pub use prioritize::{group_by_category, normalize_name, prioritize, quick_reference};

/// A command a developer would type, with a free-text description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Command {
    /// The shell string, e.g. `npm run build`.
    pub name: String,
    /// What the command does.
    #[serde(default)]
    pub description: String,
}

impl Command {
    /// Create a new command.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Command categories, declared in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Build,
    Test,
    Lint,
    Format,
    Run,
    Install,
    Clean,
    Generate,
    Deploy,
    Docker,
    Database,
    Other,
}

impl Category {
    /// Categories the quick reference tries to cover first.
    pub const IMPORTANT: [Category; 6] = [
        Category::Build,
        Category::Test,
        Category::Lint,
        Category::Format,
        Category::Run,
        Category::Install,
    ];

    /// Sort priority (lower is more important).
    pub fn priority(&self) -> u8 {
        match self {
            Category::Build => 1,
            Category::Test => 2,
            Category::Lint => 3,
            Category::Format => 4,
            Category::Run => 5,
            Category::Install => 6,
            Category::Clean => 7,
            Category::Generate => 8,
            Category::Deploy => 9,
            Category::Docker => 10,
            Category::Database => 11,
            Category::Other => 99,
        }
    }

    /// Display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Build => "Build",
            Category::Test => "Test",
            Category::Lint => "Lint",
            Category::Format => "Format",
            Category::Run => "Run",
            Category::Install => "Install",
            Category::Clean => "Clean",
            Category::Generate => "Generate",
            Category::Deploy => "Deploy",
            Category::Docker => "Docker",
            Category::Database => "Database",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
