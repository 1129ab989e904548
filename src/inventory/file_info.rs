// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Inventory entries.

use serde::Serialize;
use std::path::{Component, Path, PathBuf};

/// One entry of the repository inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    /// Path relative to the repository root.
    pub path: PathBuf,
    /// Final path component.
    pub name: String,
    /// Extension including the leading dot (`.ts`), empty when absent.
    pub extension: String,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}

impl FileInfo {
    /// Create a file entry, deriving name and extension from the path.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = file_name(&path);
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e))
            .unwrap_or_default();

        Self {
            path,
            name,
            extension,
            is_dir: false,
        }
    }

    /// Create a directory entry.
    pub fn dir(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = file_name(&path);

        Self {
            path,
            name,
            extension: String::new(),
            is_dir: true,
        }
    }

    /// The file name without its final extension.
    pub fn stem(&self) -> &str {
        self.name
            .strip_suffix(self.extension.as_str())
            .unwrap_or(&self.name)
    }

    /// The path with forward slashes, whatever the host separator.
    pub fn unix_path(&self) -> String {
        self.path.to_string_lossy().replace('\\', "/")
    }

    /// Names of the directories containing this entry, outermost first.
    pub fn ancestor_dirs(&self) -> impl Iterator<Item = &str> + '_ {
        self.path
            .parent()
            .into_iter()
            .flat_map(|p| p.components())
            .filter_map(|c| match c {
                Component::Normal(s) => s.to_str(),
                _ => None,
            })
    }

    /// The parent directory as a forward-slash string (empty at the root).
    pub fn parent_dir(&self) -> String {
        self.path
            .parent()
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .unwrap_or_default()
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_entry_fields() {
        let info = FileInfo::file("src/components/Button.test.tsx");
        assert_eq!(info.name, "Button.test.tsx");
        assert_eq!(info.extension, ".tsx");
        assert_eq!(info.stem(), "Button.test");
        assert!(!info.is_dir);
    }

    #[test]
    fn test_file_without_extension() {
        let info = FileInfo::file("Makefile");
        assert_eq!(info.extension, "");
        assert_eq!(info.stem(), "Makefile");
    }

    #[test]
    fn test_dotfile_has_no_extension() {
        let info = FileInfo::file(".editorconfig");
        assert_eq!(info.extension, "");
    }

    #[test]
    fn test_ancestor_dirs() {
        let info = FileInfo::file("src/lib/utils/date.ts");
        let dirs: Vec<&str> = info.ancestor_dirs().collect();
        assert_eq!(dirs, vec!["src", "lib", "utils"]);
        assert_eq!(info.parent_dir(), "src/lib/utils");
    }

    #[test]
    fn test_dir_entry() {
        let info = FileInfo::dir("src/models");
        assert!(info.is_dir);
        assert_eq!(info.name, "models");
        assert_eq!(info.extension, "");
    }
}
