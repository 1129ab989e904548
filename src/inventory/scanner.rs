// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Gitignore-aware repository walk.

use crate::config::InventoryConfig;
use crate::error::{ConfigError, InputError, Result};
use ignore::WalkBuilder;
use std::path::Path;

use super::FileInfo;

/// Directories that are never part of the inventory.
pub const ALWAYS_SKIPPED_DIRS: &[&str] =
    &[".git", "node_modules", "target", "vendor", "dist", "build"];

/// Walk `root` and return an inventory of its directories and files.
///
/// Entries are relative to `root` and ordered by file name within each
/// directory, so two scans of an unchanged tree are identical.
pub fn scan(root: &Path, config: &InventoryConfig) -> Result<Vec<FileInfo>> {
    if !root.is_dir() {
        return Err(InputError::RootNotDirectory {
            path: root.to_path_buf(),
        }
        .into());
    }

    let excludes = config
        .exclude
        .iter()
        .map(|pattern| {
            glob::Pattern::new(pattern).map_err(|e| ConfigError::InvalidValue {
                key: "inventory.exclude".to_string(),
                message: format!("{}: {}", pattern, e),
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let respect = config.respect_gitignore;
    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(!config.include_hidden)
        .git_ignore(respect)
        .git_global(respect)
        .git_exclude(respect)
        .ignore(respect)
        .parents(respect)
        .require_git(false)
        .max_depth(config.max_depth)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| {
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            !(is_dir
                && ALWAYS_SKIPPED_DIRS
                    .iter()
                    .any(|skip| entry.file_name() == std::ffi::OsStr::new(skip)))
        });

    let mut files = Vec::new();
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Failed to read entry: {}", e);
                continue;
            }
        };

        if entry.depth() == 0 {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };

        if excludes.iter().any(|p| p.matches_path(relative)) {
            tracing::trace!("Excluded by pattern: {}", relative.display());
            continue;
        }

        match entry.file_type() {
            Some(t) if t.is_dir() => files.push(FileInfo::dir(relative)),
            Some(t) if t.is_file() => files.push(FileInfo::file(relative)),
            _ => {}
        }
    }

    tracing::debug!("Inventory of {} contains {} entries", root.display(), files.len());
    Ok(files)
}
