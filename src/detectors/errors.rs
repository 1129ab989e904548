// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error-handling and async idioms.

use lazy_static::lazy_static;
use regex::Regex;

use crate::report::{Convention, ConventionCategory};

use super::{is_source, DetectionContext, Detector};

const MAX_SAMPLES: usize = 30;
const MIN_GO_CHECKS: usize = 5;
const MIN_RESULT_TYPES: usize = 3;
const MIN_ASYNC: usize = 5;

lazy_static! {
    static ref TRY_BLOCK: Regex = Regex::new(r"\btry\s*[{:]").unwrap();
    static ref GO_ERR_CHECK: Regex = Regex::new(r"if\s+err\s*!=\s*nil").unwrap();
    static ref RESULT_TYPE: Regex = Regex::new(r"Result<|Result::").unwrap();
    static ref ASYNC_AWAIT: Regex = Regex::new(r"\b(async|await)\b").unwrap();
}

/// Per-file evidence counts.
#[derive(Debug, Default)]
struct Counts {
    try_blocks: usize,
    go_checks: usize,
    result_types: usize,
    async_await: usize,
}

/// Reports explicit error checking, result types and async usage.
pub struct ErrorHandlingDetector;

impl Detector for ErrorHandlingDetector {
    fn name(&self) -> &'static str {
        "error-handling"
    }

    fn detect(&self, ctx: &DetectionContext<'_>) -> Vec<Convention> {
        let mut counts = Counts::default();

        for sample in ctx.sample(MAX_SAMPLES, is_source) {
            let content = &sample.content;
            if TRY_BLOCK.is_match(content) {
                counts.try_blocks += 1;
            }
            if GO_ERR_CHECK.is_match(content) {
                counts.go_checks += 1;
            }
            if RESULT_TYPE.is_match(content) {
                counts.result_types += 1;
            }
            if ASYNC_AWAIT.is_match(content) {
                counts.async_await += 1;
            }
        }

        tracing::debug!("Error handling counts: {:?}", counts);

        let mut conventions = Vec::new();
        if counts.go_checks >= MIN_GO_CHECKS {
            conventions.push(
                Convention::new(
                    ConventionCategory::ErrorHandling,
                    "Go-style explicit error checking",
                )
                .with_example("if err != nil { return err }"),
            );
        }
        if counts.result_types >= MIN_RESULT_TYPES {
            conventions.push(
                Convention::new(
                    ConventionCategory::ErrorHandling,
                    "Result/Option types for error handling",
                )
                .with_example("fn load() -> Result<Config, Error>"),
            );
        }
        if counts.async_await >= MIN_ASYNC {
            conventions.push(
                Convention::new(ConventionCategory::Async, "Async/await for asynchronous code")
                    .with_example("const user = await fetchUser(id)"),
            );
        }

        conventions
    }
}
