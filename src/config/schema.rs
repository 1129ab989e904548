// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from repoconv.toml.

use crate::commands::Command;
use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The main configuration structure for repoconv.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RepoconvConfig {
    /// Repository walk settings.
    pub inventory: InventoryConfig,

    /// Git history settings.
    pub git: GitConfig,

    /// Command discovery and quick reference settings.
    pub commands: CommandsConfig,

    /// Report output settings.
    pub output: OutputConfig,
}

impl RepoconvConfig {
    /// Load the configuration that applies to a repository root.
    pub fn load_for(root: &Path) -> crate::error::Result<Self> {
        super::loader::load_config_for(root)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Repository walk configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Honour .gitignore, .ignore and git exclude files.
    pub respect_gitignore: bool,

    /// Include hidden files and directories.
    pub include_hidden: bool,

    /// Maximum walk depth (unlimited when absent).
    pub max_depth: Option<usize>,

    /// Glob patterns (relative to the root) to leave out.
    pub exclude: Vec<String>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            respect_gitignore: true,
            include_hidden: false,
            max_depth: None,
            exclude: Vec::new(),
        }
    }
}

/// Git configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Whether to read commit and branch history at all.
    pub enabled: bool,

    /// Number of recent commits to sample.
    pub max_commits: usize,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_commits: 100,
        }
    }
}

/// Command configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandsConfig {
    /// Discover commands from manifests (package.json, Makefile, ...).
    pub discover: bool,

    /// Size of the quick reference.
    pub quick_reference: usize,

    /// Commands to add to the discovered ones.
    pub extra: Vec<Command>,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            discover: true,
            quick_reference: 8,
            extra: Vec::new(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format.
    pub format: OutputFormat,
}
