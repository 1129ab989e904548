// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! File naming conventions for components and utility modules.

use crate::analysis::naming::{classify, NamingPattern};
use crate::inventory::FileInfo;
use crate::report::{Convention, ConventionCategory};

use super::{is_source, unique_max, DetectionContext, Detector};

const COMPONENT_DIRS: &[&str] = &[
    "components", "ui", "views", "pages", "layouts", "features", "modules",
];
const UTILITY_DIRS: &[&str] = &["utils", "lib", "helpers", "hooks", "services", "api"];
const TEST_DIRS: &[&str] = &["test", "tests", "__tests__"];
const SKIPPED_STEMS: &[&str] = &["index", "main"];
const MIN_FILES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Components,
    Utilities,
    Tests,
}

fn bucket_for(file: &FileInfo) -> Option<Bucket> {
    let dirs: Vec<String> = file.ancestor_dirs().map(|d| d.to_lowercase()).collect();
    let in_any = |set: &[&str]| dirs.iter().any(|d| set.contains(&d.as_str()));
    let stem = file.stem();

    if in_any(TEST_DIRS) || stem.contains(".test") || stem.contains(".spec") || stem.ends_with("_test")
    {
        Some(Bucket::Tests)
    } else if in_any(COMPONENT_DIRS) {
        Some(Bucket::Components)
    } else if in_any(UTILITY_DIRS) {
        Some(Bucket::Utilities)
    } else {
        None
    }
}

/// Reports the dominant naming style of component and utility files.
pub struct FileNamingDetector;

impl Detector for FileNamingDetector {
    fn name(&self) -> &'static str {
        "file-naming"
    }

    fn detect(&self, ctx: &DetectionContext<'_>) -> Vec<Convention> {
        // Counts per NamingPattern::NAMED, one row per reported bucket
        let mut components = [0usize; 4];
        let mut utilities = [0usize; 4];

        for file in ctx.regular_files().filter(|f| is_source(&f.extension)) {
            let stem = file.stem();
            if SKIPPED_STEMS.contains(&stem) {
                continue;
            }

            let pattern = classify(stem);
            let Some(idx) = NamingPattern::NAMED.iter().position(|p| *p == pattern) else {
                continue;
            };

            match bucket_for(file) {
                Some(Bucket::Components) => components[idx] += 1,
                Some(Bucket::Utilities) => utilities[idx] += 1,
                Some(Bucket::Tests) | None => {}
            }
        }

        tracing::debug!(
            "File naming counts: components={:?} utilities={:?}",
            components,
            utilities
        );

        let mut conventions = Vec::new();
        for (label, counts, ext) in [
            ("Components", &components, ".tsx"),
            ("Utility files", &utilities, ".ts"),
        ] {
            if let Some(idx) = unique_max(counts, MIN_FILES) {
                let pattern = NamingPattern::NAMED[idx];
                conventions.push(
                    Convention::new(
                        ConventionCategory::Naming,
                        format!("{} use {} naming", label, pattern),
                    )
                    .with_example(format!("{}{}", pattern.example_stem(), ext)),
                );
            }
        }

        conventions
    }
}
