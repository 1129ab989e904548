// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command categorization.
//!
//! The name table is ordered data: the first matching row decides the
//! category, so a more specific row must sit above any broader row of a
//! different category that would also match.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

use super::{Category, Command};

/// Ordered `(pattern, category)` rows, matched case-insensitively against the
/// trimmed command name.
const CATEGORY_PATTERNS: &[(&str, Category)] = &[
    // Overrides that must win over broader rows below
    (r"^(npx\s+)?tsc\s+--noemit\b", Category::Lint),
    (r"^ruff\s+format\b", Category::Format),
    (r"^(python3?\s+|\./)?manage\.py\s+(migrate|makemigrations|dbshell)\b", Category::Database),
    // Build
    (r"^(npm|yarn|pnpm|bun)\s+(run\s+)?build\b", Category::Build),
    (r"^cargo\s+build\b", Category::Build),
    (r"^go\s+build\b", Category::Build),
    (r"^make(\s+(all|build))?(\s+\(in\s[^)]*\))?$", Category::Build),
    (r"^(gradle|gradlew|\./gradlew)\s+(build|assemble)\b", Category::Build),
    (r"^mvn\s+(package|compile|install|verify)\b", Category::Build),
    (r"^dotnet\s+build\b", Category::Build),
    (r"^(python3?\s+-m\s+build|poetry\s+build)\b", Category::Build),
    (r"^(npx\s+)?(tsc|vite\s+build|webpack)\b", Category::Build),
    // Test
    (r"^(npm|yarn|pnpm|bun)\s+(run\s+)?test\b", Category::Test),
    (r"^(npm|yarn|pnpm|bun)\s+run\s+(e2e|coverage|spec)\b", Category::Test),
    (r"^cargo\s+(test|nextest)\b", Category::Test),
    (r"^go\s+test\b", Category::Test),
    (r"^(pytest|tox|nox)\b", Category::Test),
    (r"^(python3?|poetry\s+run|uv\s+run|pipenv\s+run)\s+(-m\s+)?pytest\b", Category::Test),
    (r"^make\s+(test|check)\b", Category::Test),
    (r"^(gradle|gradlew|\./gradlew)\s+test\b", Category::Test),
    (r"^mvn\s+test\b", Category::Test),
    (r"^dotnet\s+test\b", Category::Test),
    (r"^(bundle\s+exec\s+)?(rspec|rake\s+test|rails\s+test)\b", Category::Test),
    (r"^(npx\s+)?(jest|vitest|mocha|playwright\s+test|cypress\s+run)\b", Category::Test),
    // Lint
    (r"^(npm|yarn|pnpm|bun)\s+(run\s+)?(lint|typecheck|type-check|check)\b", Category::Lint),
    (r"^cargo\s+(clippy|check)\b", Category::Lint),
    (r"^(golangci-lint|staticcheck)\b", Category::Lint),
    (r"^go\s+vet\b", Category::Lint),
    (r"^(poetry\s+run\s+|uv\s+run\s+)?(ruff|flake8|pylint|mypy|pyright)\b", Category::Lint),
    (r"^make\s+(lint|vet)\b", Category::Lint),
    (r"^(npx\s+)?(eslint|biome\s+(lint|check))\b", Category::Lint),
    (r"^(bundle\s+exec\s+)?rubocop\b", Category::Lint),
    // Format
    (r"^(npm|yarn|pnpm|bun)\s+(run\s+)?(format|fmt|prettier)\b", Category::Format),
    (r"^cargo\s+fmt\b", Category::Format),
    (r"^(go\s+fmt|gofmt|goimports)\b", Category::Format),
    (r"^(poetry\s+run\s+|uv\s+run\s+)?(black|isort)\b", Category::Format),
    (r"^make\s+(fmt|format)\b", Category::Format),
    (r"^(npx\s+)?prettier\b", Category::Format),
    (r"^dotnet\s+format\b", Category::Format),
    // Run
    (r"^(npm|yarn|pnpm|bun)\s+(run\s+)?(start|dev|serve|preview|watch)\b", Category::Run),
    (r"^cargo\s+(run|watch)\b", Category::Run),
    (r"^go\s+run\b", Category::Run),
    (r"^(python3?\s+|\./)?manage\.py\s+runserver\b", Category::Run),
    (r"^(flask\s+run|uvicorn|gunicorn|streamlit\s+run)\b", Category::Run),
    (r"^dotnet\s+(run|watch)\b", Category::Run),
    (r"^(bundle\s+exec\s+)?rails\s+(s|server)\b", Category::Run),
    (r"^make\s+(run|dev|start|serve|watch)\b", Category::Run),
    (r"^(python3?|node|deno\s+run|bun)\s+\S+\.(py|js|mjs|ts)\b", Category::Run),
    // Install
    (r"^(npm|pnpm|bun)\s+(install|i|ci|add)\b", Category::Install),
    (r"^yarn(\s+install)?(\s+\(in\s[^)]*\))?$", Category::Install),
    (r"^yarn\s+add\b", Category::Install),
    (r"^go\s+(mod\s+(download|tidy)|get)\b", Category::Install),
    (r"^(pip3?\s+install|python3?\s+-m\s+pip\s+install|poetry\s+install|uv\s+sync|pipenv\s+install)\b", Category::Install),
    (r"^bundle(\s+install)?(\s+\(in\s[^)]*\))?$", Category::Install),
    (r"^cargo\s+(fetch|install)\b", Category::Install),
    (r"^dotnet\s+restore\b", Category::Install),
    (r"^make\s+(install|deps|setup|bootstrap)\b", Category::Install),
    (r"^composer\s+install\b", Category::Install),
    // Clean
    (r"^(npm|yarn|pnpm|bun)\s+(run\s+)?clean\b", Category::Clean),
    (r"^(cargo|go|dotnet)\s+clean\b", Category::Clean),
    (r"^make\s+(clean|distclean)\b", Category::Clean),
    (r"^(gradle|gradlew|\./gradlew|mvn)\s+clean\b", Category::Clean),
    (r"^rm\s+-r", Category::Clean),
    // Generate
    (r"^(npm|yarn|pnpm|bun)\s+(run\s+)?(generate|codegen|gen)\b", Category::Generate),
    (r"^go\s+generate\b", Category::Generate),
    (r"^(npx\s+)?prisma\s+generate\b", Category::Generate),
    (r"^(buf\s+generate|protoc)\b", Category::Generate),
    (r"^make\s+(generate|gen|proto|codegen)\b", Category::Generate),
    (r"^(npx\s+)?graphql-codegen\b", Category::Generate),
    // Deploy
    (r"^(npm|yarn|pnpm|bun)\s+(run\s+)?(deploy|release|publish)\b", Category::Deploy),
    (r"^kubectl\s+(apply|rollout|create)\b", Category::Deploy),
    (r"^helm\s+(install|upgrade)\b", Category::Deploy),
    (r"^terraform\s+(apply|plan|init)\b", Category::Deploy),
    (r"^(vercel|netlify\s+deploy|flyctl?\s+deploy|serverless\s+deploy|sls\s+deploy)\b", Category::Deploy),
    (r"^make\s+(deploy|release|publish)\b", Category::Deploy),
    (r"^cargo\s+publish\b", Category::Deploy),
    // Docker
    (r"^docker(-compose|\s+compose)?\b", Category::Docker),
    (r"^podman(-compose)?\b", Category::Docker),
    (r"^make\s+docker\b", Category::Docker),
    (r"^(npm|yarn|pnpm|bun)\s+(run\s+)?docker\b", Category::Docker),
    // Database
    (r"^(npx\s+)?prisma\s+(migrate|db|studio)\b", Category::Database),
    (r"^alembic\b", Category::Database),
    (r"^(bundle\s+exec\s+)?(rails|rake)\s+db:", Category::Database),
    (r"^(npm|yarn|pnpm|bun)\s+(run\s+)?(migrate|migration|db|seed)\b", Category::Database),
    (r"^make\s+(migrate|db|seed)\b", Category::Database),
    (r"^(diesel|sqlx|flyway|liquibase)\b", Category::Database),
    (r"^(npx\s+)?(knex|sequelize|typeorm|drizzle-kit)\b", Category::Database),
];

/// Description keywords consulted when no name pattern matched, in order.
const DESCRIPTION_KEYWORDS: &[(&[&str], Category)] = &[
    (&["build", "compile"], Category::Build),
    (&["test"], Category::Test),
    (&["lint", "check"], Category::Lint),
    (&["format"], Category::Format),
    (&["install", "dependencies"], Category::Install),
    (&["clean"], Category::Clean),
    (&["run", "start", "dev"], Category::Run),
];

/// A compiled row of the command table.
#[derive(Debug)]
pub struct CategoryRule {
    /// Case-insensitive name pattern.
    pub pattern: Regex,
    /// Category assigned on match.
    pub category: Category,
}

lazy_static! {
    static ref CATEGORY_RULES: Vec<CategoryRule> = CATEGORY_PATTERNS
        .iter()
        .map(|(pattern, category)| CategoryRule {
            pattern: RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .unwrap(),
            category: *category,
        })
        .collect();
}

/// The ordered command table.
pub fn category_rules() -> &'static [CategoryRule] {
    &CATEGORY_RULES
}

/// Assign a category to a command.
pub fn categorize(command: &Command) -> Category {
    let name = command.name.trim();

    if let Some(rule) = category_rules().iter().find(|r| r.pattern.is_match(name)) {
        return rule.category;
    }

    let description = command.description.to_lowercase();
    DESCRIPTION_KEYWORDS
        .iter()
        .find(|(words, _)| words.iter().any(|w| description.contains(w)))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Other)
}
