// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Documentation comment styles and TODO markers.

use lazy_static::lazy_static;
use regex::Regex;

use crate::report::{Convention, ConventionCategory};

use super::{is_documentable, DetectionContext, Detector};

const MAX_SAMPLES: usize = 50;
const MIN_DOC_FILES: usize = 5;
const MIN_TODOS: usize = 10;

/// A documentation comment style.
#[derive(Debug)]
pub struct DocStyle {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    pub pattern: Regex,
    pub description: &'static str,
    pub example: &'static str,
}

lazy_static! {
    static ref DOC_STYLES: Vec<DocStyle> = vec![
        DocStyle {
            name: "jsdoc",
            extensions: &[".js", ".jsx", ".ts", ".tsx"],
            pattern: Regex::new(r"/\*\*(?:[^*]|\*[^/])*?@(?:param|returns?|throws|example)\b").unwrap(),
            description: "JSDoc comments document functions",
            example: "/** @param id - user id */",
        },
        DocStyle {
            name: "javadoc",
            extensions: &[".java", ".kt", ".scala"],
            pattern: Regex::new(r"/\*\*(?:[^*]|\*[^/])*?@(?:param|return|throws|see)\b").unwrap(),
            description: "Javadoc/KDoc comments document methods",
            example: "/** @return the user */",
        },
        DocStyle {
            name: "docstring",
            extensions: &[".py"],
            pattern: Regex::new(r#""""[^"]*?\n\s*(?:Args|Returns|Raises|Yields):"#).unwrap(),
            description: "Google-style docstrings",
            example: "\"\"\"Fetch a user.\n\n    Args:\n        id: user id\n\"\"\"",
        },
        DocStyle {
            name: "godoc",
            extensions: &[".go"],
            pattern: Regex::new(r"(?m)^//\s+[A-Z]\w*\s.*\n(?:func|type)\s").unwrap(),
            description: "Go doc comments precede declarations",
            example: "// Fetch returns the user with the given id.",
        },
        DocStyle {
            name: "xmldoc",
            extensions: &[".cs"],
            pattern: Regex::new(r"///\s*<summary>").unwrap(),
            description: "XML documentation comments",
            example: "/// <summary>Fetches a user.</summary>",
        },
        DocStyle {
            name: "rustdoc",
            extensions: &[".rs"],
            pattern: Regex::new(r"(?m)^\s*///\s*\S").unwrap(),
            description: "Rust doc comments (///)",
            example: "/// Fetch the user with the given id.",
        },
    ];

    static ref TODO_MARKER: Regex = Regex::new(r"\b(TODO|FIXME|HACK|XXX)\b").unwrap();
}

/// The documentation styles, in detection order.
pub fn doc_styles() -> &'static [DocStyle] {
    &DOC_STYLES
}

/// Reports documentation comment styles and heavy TODO usage.
pub struct CommentDetector;

impl Detector for CommentDetector {
    fn name(&self) -> &'static str {
        "commenting"
    }

    fn detect(&self, ctx: &DetectionContext<'_>) -> Vec<Convention> {
        let styles = doc_styles();
        let mut counts = vec![0usize; styles.len()];
        let (mut todos, mut fixmes) = (0usize, 0usize);

        for sample in ctx.sample(MAX_SAMPLES, is_documentable) {
            for (style, count) in styles.iter().zip(counts.iter_mut()) {
                if style.extensions.contains(&sample.extension)
                    && style.pattern.is_match(&sample.content)
                {
                    *count += 1;
                }
            }

            for caps in TODO_MARKER.captures_iter(&sample.content) {
                todos += 1;
                if &caps[1] == "FIXME" {
                    fixmes += 1;
                }
            }
        }

        tracing::debug!(
            "Comment counts: styles={:?} todo={} fixme={}",
            counts,
            todos,
            fixmes
        );

        let mut conventions: Vec<Convention> = styles
            .iter()
            .zip(&counts)
            .filter(|(_, count)| **count >= MIN_DOC_FILES)
            .map(|(style, _)| {
                Convention::new(ConventionCategory::Documentation, style.description)
                    .with_example(style.example)
            })
            .collect();

        if todos >= MIN_TODOS {
            conventions.push(Convention::new(
                ConventionCategory::Documentation,
                format!(
                    "TODO/FIXME markers track pending work ({} found in sampled files)",
                    todos
                ),
            ));
        }

        conventions
    }
}
