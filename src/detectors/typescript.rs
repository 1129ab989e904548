// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! TypeScript compiler strictness.

use crate::report::{Convention, ConventionCategory};

use super::{tsconfig, DetectionContext, Detector};

/// Reports strictness flags enabled in tsconfig.json.
pub struct TypedConfigDetector;

impl Detector for TypedConfigDetector {
    fn name(&self) -> &'static str {
        "typed-config"
    }

    fn detect(&self, ctx: &DetectionContext<'_>) -> Vec<Convention> {
        let Some(config) = tsconfig::load(ctx) else {
            return Vec::new();
        };
        let Some(options) = tsconfig::compiler_options(&config) else {
            return Vec::new();
        };
        let enabled = |key: &str| options.get(key).and_then(|v| v.as_bool()) == Some(true);

        let mut conventions = Vec::new();
        if enabled("strict") {
            conventions.push(Convention::new(
                ConventionCategory::Typescript,
                "TypeScript strict mode is enabled",
            ));
        }
        if enabled("noImplicitAny") {
            conventions.push(Convention::new(
                ConventionCategory::Typescript,
                "Implicit `any` is disallowed (noImplicitAny)",
            ));
        }
        if enabled("noUnusedLocals") || enabled("noUnusedParameters") {
            conventions.push(Convention::new(
                ConventionCategory::Typescript,
                "Unused locals and parameters are compile errors",
            ));
        }

        conventions
    }
}
