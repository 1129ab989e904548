// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Architectural layout inferred from directory names.

use std::collections::HashSet;

use crate::report::{Convention, ConventionCategory};

use super::{DetectionContext, Detector};

/// Reports layered or feature-oriented layouts.
pub struct ArchitectureDetector;

impl Detector for ArchitectureDetector {
    fn name(&self) -> &'static str {
        "architecture"
    }

    fn detect(&self, ctx: &DetectionContext<'_>) -> Vec<Convention> {
        let dirs: HashSet<String> = ctx.directory_names().collect();
        let has = |name: &str| dirs.contains(name);

        let mut conventions = Vec::new();
        let mut push = |description: &str, example: &str| {
            conventions.push(
                Convention::new(ConventionCategory::Architecture, description)
                    .with_example(example),
            );
        };

        if has("models") && has("views") && has("controllers") {
            push("MVC architecture", "models/, views/, controllers/");
        }
        if has("domain") && (has("infrastructure") || has("adapters")) {
            push(
                "Clean/Hexagonal architecture",
                "domain/ isolated from infrastructure/ or adapters/",
            );
        }
        if has("features") || has("modules") {
            push(
                "Feature/Module-based organization",
                "features/<feature>/ groups related code",
            );
        }
        if has("repositories") || has("repository") {
            push("Repository pattern for data access", "repositories/");
        }
        if has("services") || has("service") {
            push("Service layer for business logic", "services/");
        }

        conventions
    }
}
