// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Formatter and linter configuration.

use crate::report::{Convention, ConventionCategory};

use super::{DetectionContext, Detector};

/// ESLint configuration file names.
pub const ESLINT_CONFIGS: &[&str] = &[
    ".eslintrc",
    ".eslintrc.js",
    ".eslintrc.cjs",
    ".eslintrc.json",
    ".eslintrc.yml",
    ".eslintrc.yaml",
    "eslint.config.js",
    "eslint.config.mjs",
    "eslint.config.cjs",
    "eslint.config.ts",
];

/// Prettier configuration file names.
pub const PRETTIER_CONFIGS: &[&str] = &[
    ".prettierrc",
    ".prettierrc.json",
    ".prettierrc.yml",
    ".prettierrc.yaml",
    ".prettierrc.js",
    ".prettierrc.cjs",
    ".prettierrc.toml",
    "prettier.config.js",
    "prettier.config.cjs",
    "prettier.config.mjs",
];

/// Reports linters and formatters configured at the repository root.
pub struct StyleToolingDetector;

impl Detector for StyleToolingDetector {
    fn name(&self) -> &'static str {
        "style-tooling"
    }

    fn detect(&self, ctx: &DetectionContext<'_>) -> Vec<Convention> {
        let mut conventions = Vec::new();
        let any_present = |names: &[&str]| names.iter().any(|n| ctx.root_has_file(n));

        if any_present(ESLINT_CONFIGS) {
            conventions.push(
                Convention::new(ConventionCategory::CodeStyle, "ESLint configured")
                    .with_example("npx eslint ."),
            );
        }
        if any_present(PRETTIER_CONFIGS) {
            conventions.push(
                Convention::new(ConventionCategory::CodeStyle, "Prettier configured")
                    .with_example("npx prettier --write ."),
            );
        }
        if ctx.root_has_file(".editorconfig") {
            conventions.push(Convention::new(
                ConventionCategory::CodeStyle,
                "EditorConfig present",
            ));
        }
        if ctx.regular_files().any(|f| f.extension == ".go") {
            conventions.push(
                Convention::new(ConventionCategory::CodeStyle, "Go project, use gofmt")
                    .with_example("gofmt -w ."),
            );
        }

        conventions
    }
}
