// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Convention detectors.
//!
//! Each detector is independent: it looks at the inventory, optionally
//! samples file contents through its own [`Sampler`] pass, and returns the
//! conventions whose evidence reached its threshold. Detectors never see
//! each other's results.

mod architecture;
pub mod comments;
mod components;
mod errors;
mod file_naming;
mod imports;
pub mod logging;
mod style;
mod testing;
mod tsconfig;
mod typescript;

use crate::analysis::{CancellationToken, FileReader, Sampler, MAX_FILE_BYTES};
use crate::inventory::FileInfo;
use crate::report::Convention;
use std::path::Path;

pub use architecture::ArchitectureDetector;
pub use comments::CommentDetector;
pub use components::ComponentDetector;
pub use errors::ErrorHandlingDetector;
pub use file_naming::FileNamingDetector;
pub use imports::ImportStyleDetector;
pub use logging::LoggingDetector;
pub use style::StyleToolingDetector;
pub use testing::TestLayoutDetector;
pub use typescript::TypedConfigDetector;

/// Extensions treated as source code.
pub const SOURCE_EXTENSIONS: &[&str] = &[
    ".js", ".jsx", ".ts", ".tsx", ".go", ".py", ".rs", ".rb", ".vue", ".svelte",
];

/// Extensions whose files may carry documentation comments.
pub const DOCUMENTABLE_EXTENSIONS: &[&str] = &[
    ".js", ".jsx", ".ts", ".tsx", ".go", ".py", ".rs", ".rb", ".vue", ".svelte", ".java", ".kt",
    ".scala", ".cs", ".cpp", ".c", ".h", ".hpp", ".swift", ".php",
];

/// Whether an extension is a source extension.
pub fn is_source(extension: &str) -> bool {
    SOURCE_EXTENSIONS.contains(&extension)
}

/// Whether an extension is a documentable extension.
pub fn is_documentable(extension: &str) -> bool {
    DOCUMENTABLE_EXTENSIONS.contains(&extension)
}

/// Everything a detector may look at.
pub struct DetectionContext<'a> {
    /// Absolute repository root.
    pub root: &'a Path,
    /// Repository inventory.
    pub files: &'a [FileInfo],
    reader: &'a dyn FileReader,
    cancel: &'a CancellationToken,
}

impl<'a> DetectionContext<'a> {
    /// Create a new detection context.
    pub fn new(
        root: &'a Path,
        files: &'a [FileInfo],
        reader: &'a dyn FileReader,
        cancel: &'a CancellationToken,
    ) -> Self {
        Self {
            root,
            files,
            reader,
            cancel,
        }
    }

    /// Start a sampling pass over files whose extension passes `filter`.
    pub fn sample<F>(&self, max_samples: usize, filter: F) -> Sampler<'a, F>
    where
        F: Fn(&str) -> bool,
    {
        Sampler::new(
            self.root,
            self.files,
            self.reader,
            self.cancel,
            max_samples,
            filter,
        )
    }

    /// Read a file at the repository root as text, if it exists and is small
    /// enough.
    pub fn read_root_file(&self, name: &str) -> Option<String> {
        self.reader
            .read_bytes(&self.root.join(name), MAX_FILE_BYTES)
            .ok()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Whether a file with this name exists at the repository root.
    pub fn root_has_file(&self, name: &str) -> bool {
        self.root.join(name).is_file()
    }

    /// Non-directory entries of the inventory.
    pub fn regular_files(&self) -> impl Iterator<Item = &'a FileInfo> {
        self.files.iter().filter(|f| !f.is_dir)
    }

    /// Lowercased names of every directory in the inventory.
    pub fn directory_names(&self) -> impl Iterator<Item = String> + 'a {
        self.files
            .iter()
            .filter(|f| f.is_dir)
            .map(|f| f.name.to_lowercase())
    }
}

/// A convention detector.
pub trait Detector: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Inspect the repository and return the conventions that hold.
    fn detect(&self, ctx: &DetectionContext<'_>) -> Vec<Convention>;
}

/// All built-in detectors, in reporting order.
pub fn builtin_detectors() -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(FileNamingDetector),
        Box::new(ImportStyleDetector),
        Box::new(TypedConfigDetector),
        Box::new(TestLayoutDetector),
        Box::new(StyleToolingDetector),
        Box::new(ComponentDetector),
        Box::new(CommentDetector),
        Box::new(LoggingDetector),
        Box::new(ErrorHandlingDetector),
        Box::new(ArchitectureDetector),
    ]
}

/// Index of the unique maximum of `counts` if it reaches `min`.
///
/// Returns `None` on ties for the maximum.
pub(crate) fn unique_max(counts: &[usize], min: usize) -> Option<usize> {
    let max = *counts.iter().max()?;
    if max < min || counts.iter().filter(|&&c| c == max).count() > 1 {
        return None;
    }
    counts.iter().position(|&c| c == max)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_max() {
        assert_eq!(unique_max(&[1, 4, 2], 3), Some(1));
        assert_eq!(unique_max(&[1, 2, 2], 2), None);
        assert_eq!(unique_max(&[1, 2, 0], 3), None);
        assert_eq!(unique_max(&[], 1), None);
    }

    #[test]
    fn test_extension_lists() {
        assert!(is_source(".tsx"));
        assert!(!is_source(".java"));
        assert!(is_documentable(".java"));
        assert!(SOURCE_EXTENSIONS.iter().all(|e| is_documentable(e)));
    }

    #[test]
    fn test_builtin_detector_names_unique() {
        let detectors = builtin_detectors();
        let mut names: Vec<&str> = detectors.iter().map(|d| d.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), detectors.len());
    }
}
