// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! repoconv - Repository convention analyzer
//!
//! Inspects a repository on disk and reports the conventions it appears to
//! follow, together with its developer commands ranked by importance. The
//! analysis is read-only and offline.
//!
//! # Features
//!
//! - **Convention Detectors**: file naming, imports, TypeScript strictness,
//!   test layout, style tooling, components, documentation, logging, error
//!   handling and architecture
//! - **Git Conventions**: commit message style and branch prefixes
//! - **Command Ranking**: categorized, deduplicated commands and a quick
//!   reference covering build, test, lint, format, run and install
//!
//! # Example
//!
//! ```no_run
//! use repoconv::analysis::Analyzer;
//! use repoconv::commands::discover;
//! use repoconv::analysis::FsReader;
//! use repoconv::config::InventoryConfig;
//! use repoconv::inventory::scan;
//! use std::path::Path;
//!
//! let root = Path::new("/path/to/repo");
//! let files = scan(root, &InventoryConfig::default()).unwrap();
//! let commands = discover(root, &files, &FsReader);
//!
//! let report = Analyzer::new().analyze(root, &files, &commands).unwrap();
//! for convention in &report.conventions {
//!     println!("[{}] {}", convention.category, convention.description);
//! }
//! ```

// Module declarations
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod detectors;
pub mod error;
pub mod git;
pub mod inventory;
pub mod report;

// Re-exports for convenience
pub use analysis::{analyze, Analyzer};
pub use config::RepoconvConfig;
pub use error::{RepoconvError, Result};
pub use report::Report;

/// Version information embedded at compile time.
pub mod version {
    /// The current version of repoconv.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// The git branch at compile time (if available).
    pub const GIT_BRANCH: Option<&str> = option_env!("VERGEN_GIT_BRANCH");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        let short = |sha: &str| sha[..7.min(sha.len())].to_string();
        match (GIT_SHA, GIT_COMMIT_DATE, GIT_BRANCH) {
            (Some(sha), Some(date), Some(branch)) => {
                format!("{} ({} {} on {})", VERSION, short(sha), date, branch)
            }
            (Some(sha), Some(date), None) => format!("{} ({} {})", VERSION, short(sha), date),
            (Some(sha), None, _) => format!("{} ({})", VERSION, short(sha)),
            _ => VERSION.to_string(),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_version_string_starts_with_version() {
            assert!(version_string().starts_with(VERSION));
        }
    }
}
